use super::genome::Genome;
use crate::config::{CrossoverPolicy, MutationBias};
use crate::error::{BoxevolveError, Result};
use rand::Rng;
use rand_distr::{Beta, Distribution};

/// Roulette-wheel selection: returns an index into `fitnesses` with
/// probability proportional to fitness. A zero (or non-positive) total falls
/// back to a uniform draw rather than dividing by zero.
pub fn roulette_select<R: Rng>(fitnesses: &[f64], rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "selection over an empty pool");

    let total: f64 = fitnesses.iter().map(|f| f.max(0.0)).sum();
    if total <= 0.0 {
        return rng.gen_range(0..fitnesses.len());
    }

    let mut spin = rng.gen::<f64>() * total;
    for (i, fitness) in fitnesses.iter().enumerate() {
        spin -= fitness.max(0.0);
        if spin <= 0.0 {
            return i;
        }
    }

    // Floating-point remainder lands on the last slot
    fitnesses.len() - 1
}

/// Draw a crossover cut point in [0, length).
pub fn draw_cut<R: Rng>(length: usize, policy: CrossoverPolicy, rng: &mut R) -> usize {
    match policy {
        CrossoverPolicy::UniformCut => rng.gen_range(0..length),
        CrossoverPolicy::FrontBiased => {
            let beta = Beta::new(2.0, 5.0).expect("valid Beta(2,5) parameters");
            let cut = (beta.sample(rng) * length as f64) as usize;
            cut.min(length - 1)
        }
    }
}

/// Single-point crossover: the child takes `a`'s genes before the cut and
/// `b`'s genes from the cut onward. Parents of unequal length violate the
/// fixed-length contract.
pub fn crossover<R: Rng>(
    a: &Genome,
    b: &Genome,
    policy: CrossoverPolicy,
    rng: &mut R,
) -> Result<Genome> {
    if a.len() != b.len() {
        return Err(BoxevolveError::GenomeLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let cut = draw_cut(a.len(), policy, rng);
    let decisions = a.decisions()[..cut]
        .iter()
        .chain(&b.decisions()[cut..])
        .copied()
        .collect();
    Ok(Genome::from_decisions(decisions))
}

/// Flip each gene independently with probability `rate`, optionally scaled
/// by position.
pub fn mutate<R: Rng>(genome: &mut Genome, rate: f64, bias: MutationBias, rng: &mut R) {
    let half = genome.len() / 2;
    for (i, gene) in genome.decisions_mut().iter_mut().enumerate() {
        let p = match bias {
            MutationBias::Uniform => rate,
            MutationBias::FrontLoaded {
                early_scale,
                late_scale,
            } => {
                if i < half {
                    rate * early_scale
                } else {
                    rate * late_scale
                }
            }
        };
        if rng.gen::<f64>() < p {
            *gene = gene.flipped();
        }
    }
}

/// Flip genes only inside [center - radius, center + radius], clamped to the
/// genome. A window entirely outside the genome is a no-op.
pub fn mutate_windowed<R: Rng>(
    genome: &mut Genome,
    rate: f64,
    center: usize,
    radius: usize,
    rng: &mut R,
) {
    let start = center.saturating_sub(radius);
    let end = center.saturating_add(radius + 1).min(genome.len());
    if start >= end {
        return;
    }

    for gene in &mut genome.decisions_mut()[start..end] {
        if rng.gen::<f64>() < rate {
            *gene = gene.flipped();
        }
    }
}
