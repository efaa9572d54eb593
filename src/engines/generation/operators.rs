use crate::engines::generation::chromosome::Chromosome;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Number of individuals drawn by selection: `round(rate * size)`.
pub fn selection_count(selection_rate: f64, population_size: usize) -> usize {
    (selection_rate * population_size as f64).round() as usize
}

/// Weighted selection: draw `count` individuals with replacement, each with
/// probability proportional to its weight. Falls back to uniform draws when
/// the weights cannot form a distribution (all zero, negative, NaN).
pub fn weighted_selection<C: Clone, R: Rng>(
    population: &[C],
    weights: &[f64],
    count: usize,
    rng: &mut R,
) -> Vec<C> {
    if population.is_empty() || count == 0 {
        return Vec::new();
    }

    match WeightedIndex::<f64>::new(weights.iter().copied()) {
        Ok(dist) => (0..count)
            .map(|_| population[dist.sample(rng)].clone())
            .collect(),
        Err(err) => {
            log::debug!("Selection weights unusable ({}), drawing uniformly", err);
            (0..count)
                .map(|_| population[rng.gen_range(0..population.len())].clone())
                .collect()
        }
    }
}

/// Single-point crossover at a real-valued cut in `[0, length(parent1))`.
///
/// Each child keeps one parent's head and the other parent's tail; the tail
/// slices run to each parent's own length. Without crossover the parents
/// come back as they went in.
pub fn crossover<C: Chromosome, R: Rng>(
    parent1: C,
    parent2: C,
    crossover_rate: f64,
    rng: &mut R,
) -> (C, C) {
    if rng.gen::<f64>() >= crossover_rate {
        return (parent1, parent2);
    }

    let length1 = parent1.structural_length();
    let length2 = parent2.structural_length();
    let point = rng.gen::<f64>() * length1;

    let child1 = parent1.slice(0.0, point).concat(&parent2.slice(point, length2));
    let child2 = parent2.slice(0.0, point).concat(&parent1.slice(point, length1));

    (child1, child2)
}

/// Shift each pitch by one semitone up or down with probability
/// `mutation_rate`. No range clamping.
pub fn mutate<C: Chromosome, R: Rng>(chromosome: &mut C, mutation_rate: f64, rng: &mut R) {
    for pitch in chromosome.pitches_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *pitch += if rng.gen_bool(0.5) { 1 } else { -1 };
        }
    }
}
