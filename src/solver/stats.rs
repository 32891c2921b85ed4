#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolveStats {
    /// Dictionary words playable on the puzzle
    pub usable_words: usize,
    /// Distinct edges the usable words collapse into
    pub edges: usize,
    /// Chain lengths searched, in order
    pub depths: Vec<usize>,
    /// Chains visited over every depth
    pub explored: u64,
    /// Solution chains returned
    pub chains: usize,
}
