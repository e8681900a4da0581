use crate::types::Decision;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed-length, step-indexed decision sequence: the agent consumes one gene
/// per simulation tick, in order. Crossover and mutation never change the
/// length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    decisions: Vec<Decision>,
}

impl Genome {
    pub fn from_decisions(decisions: Vec<Decision>) -> Self {
        Self { decisions }
    }

    /// Uniform random Jump/Noop per gene.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let decisions = (0..length)
            .map(|_| {
                if rng.gen::<bool>() {
                    Decision::Jump
                } else {
                    Decision::Noop
                }
            })
            .collect();
        Self { decisions }
    }

    /// All-NOOP genome, the generation-zero seed that leaves discovery to
    /// mutation.
    pub fn all_noop(length: usize) -> Self {
        Self {
            decisions: vec![Decision::Noop; length],
        }
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Decision> {
        self.decisions.get(index).copied()
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub(crate) fn decisions_mut(&mut self) -> &mut [Decision] {
        &mut self.decisions
    }

    pub fn jump_count(&self) -> usize {
        self.decisions
            .iter()
            .filter(|&&d| d == Decision::Jump)
            .count()
    }
}
