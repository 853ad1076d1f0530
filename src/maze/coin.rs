use rand::Rng;

/// Source de décisions aléatoires « mur ou fusion ».
///
/// Les passes horizontale et verticale tirent toutes leurs décisions d'un
/// `Coin`, ce qui permet de fixer les résultats dans les tests.
pub trait Coin {
    /// Vrai pour poser un mur, faux pour fusionner (ou laisser ouvert).
    fn add_wall(&mut self) -> bool;
}

impl<C: Coin + ?Sized> Coin for &mut C {
    fn add_wall(&mut self) -> bool {
        (**self).add_wall()
    }
}

/// Pièce équilibrée adossée à un générateur `rand`.
#[derive(Debug)]
pub struct RandomCoin<R> {
    rng: R,
}

impl<R: Rng> RandomCoin<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Coin for RandomCoin<R> {
    fn add_wall(&mut self) -> bool {
        // Tirage entre 1 et 10, mur au-dessus de 5 : une chance sur deux.
        self.rng.random_range(1..=10) > 5
    }
}

/// Pièce truquée, toujours le même résultat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedCoin {
    AlwaysWall,
    AlwaysMerge,
}

impl Coin for FixedCoin {
    fn add_wall(&mut self) -> bool {
        matches!(self, FixedCoin::AlwaysWall)
    }
}
