use serde_json::{json, Value};

use crate::error::Result;
use crate::maze::Maze;

/// Vue JSON du labyrinthe, telle que la lit une couche de présentation.
///
/// `{"rows": R, "columns": C, "cells": [[{"set", "rightWall", "bottomWall"}, ...], ...]}`
pub fn maze_to_json(maze: &Maze) -> Result<Value> {
    Ok(json!({
        "rows": maze.height(),
        "columns": maze.width(),
        "cells": serde_json::to_value(maze.rows())?,
    }))
}

pub fn maze_to_json_string(maze: &Maze) -> Result<String> {
    Ok(serde_json::to_string(&maze_to_json(maze)?)?)
}
