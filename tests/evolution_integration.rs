use melodevo::config::{AppConfig, CorpusConfig, EvolutionConfig};
use melodevo::data::{load_corpus, CorpusMode, JsonConnector, ResultWriter};
use melodevo::engines::evaluation::DissonanceFitness;
use melodevo::engines::generation::{
    EvolutionEngine, GenerationResult, OptimizationDirection, ProgressCallback,
};
use melodevo::music::{Phrase, Tonality};
use melodevo::{MelodevoError, Result};
use std::path::PathBuf;

/// Simple progress callback for testing
#[derive(Default)]
struct TestProgressCallback {
    started: Vec<usize>,
    completed: Vec<(usize, f64)>,
}

impl ProgressCallback<Phrase> for TestProgressCallback {
    fn on_generation_start(&mut self, generation: usize, _total: usize) {
        self.started.push(generation);
    }

    fn on_generation_complete(&mut self, result: &GenerationResult<Phrase>) -> Result<()> {
        self.completed.push((result.generation, result.fitness));
        println!(
            "Generation {}: Best Fitness = {:.4}, Population = {}",
            result.generation + 1,
            result.fitness,
            result.population_size
        );
        Ok(())
    }
}

fn seed_population() -> Vec<Phrase> {
    vec![
        Phrase::from_pitches(&[60, 62, 64, 65, 67], 0.2),
        Phrase::from_pitches(&[72, 71, 69, 67, 65, 64], 0.125),
        Phrase::from_pitches(&[60, 67, 64, 72, 70, 69], 0.25),
        Phrase::from_pitches(&[62, 66, 69, 73, 74], 0.2),
    ]
}

/// Create a minimal evolution config for fast testing
fn create_test_evolution_config(generations: usize) -> EvolutionConfig {
    EvolutionConfig {
        mutation_rate: 0.1,
        crossover_rate: 0.8,
        selection_rate: 1.0,
        generations,
        direction: OptimizationDirection::Minimize,
        seed: Some(7),
    }
}

fn run_generations(config: EvolutionConfig) -> Result<Vec<GenerationResult<Phrase>>> {
    EvolutionEngine::new(
        config,
        seed_population(),
        DissonanceFitness::default(),
        Tonality::c_major(),
    )?
    .collect()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("melodevo-it-{}-{}", std::process::id(), name))
}

#[test]
fn test_three_generations_from_four_fragments() {
    let results = run_generations(create_test_evolution_config(3)).unwrap();

    assert_eq!(results.len(), 3);
    for result in &results {
        assert!(result.fitness.is_finite());
        assert!(result.fitness >= 0.0);
        assert_eq!(result.population_size, 4);
        assert!(!result.best.is_empty());
    }
}

#[test]
fn test_same_seed_same_run() {
    let first = run_generations(create_test_evolution_config(5)).unwrap();
    let second = run_generations(create_test_evolution_config(5)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_without_variation_best_is_a_seed_fragment() {
    let config = EvolutionConfig {
        mutation_rate: 0.0,
        crossover_rate: 0.0,
        ..create_test_evolution_config(4)
    };
    let seeds = seed_population();

    for result in run_generations(config).unwrap() {
        assert!(seeds.contains(&result.best));
    }
}

#[test]
fn test_single_fragment_population_empties() {
    let mut engine = EvolutionEngine::new(
        create_test_evolution_config(3),
        vec![Phrase::from_pitches(&[60, 62, 64, 65, 67], 0.2)],
        DissonanceFitness::default(),
        Tonality::c_major(),
    )
    .unwrap();

    assert!(matches!(
        engine.next(),
        Some(Err(MelodevoError::EmptyPopulation { generation: 0 }))
    ));
    assert!(engine.next().is_none());
}

#[test]
fn test_zero_selection_rate_fails_first_generation() {
    let config = EvolutionConfig {
        selection_rate: 0.0,
        ..create_test_evolution_config(3)
    };
    assert!(matches!(
        run_generations(config),
        Err(MelodevoError::EmptyPopulation { generation: 0 })
    ));
}

#[test]
fn test_maximize_reports_highest_score() {
    let config = EvolutionConfig {
        direction: OptimizationDirection::Maximize,
        ..create_test_evolution_config(1)
    };
    let mut engine = EvolutionEngine::new(
        config,
        seed_population(),
        DissonanceFitness::default(),
        Tonality::c_major(),
    )
    .unwrap();

    let result = engine.next().unwrap().unwrap();
    assert!(engine.scores().iter().all(|&score| score <= result.fitness));
}

#[test]
fn test_run_reports_every_generation_and_overall_best() {
    let mut engine = EvolutionEngine::new(
        create_test_evolution_config(6),
        seed_population(),
        DissonanceFitness::default(),
        Tonality::c_major(),
    )
    .unwrap();
    let mut callback = TestProgressCallback::default();

    let best = engine.run(&mut callback).unwrap().unwrap();

    assert_eq!(callback.started, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(callback.completed.len(), 6);
    let lowest = callback
        .completed
        .iter()
        .map(|&(_, fitness)| fitness)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(best.fitness, lowest);
    assert!(engine.run(&mut callback).unwrap().is_none());
}

#[test]
fn test_run_writes_one_line_per_generation() {
    let mut engine = EvolutionEngine::new(
        create_test_evolution_config(4),
        seed_population(),
        DissonanceFitness::default(),
        Tonality::c_major(),
    )
    .unwrap();

    let mut writer = ResultWriter::new(Vec::new());
    engine.run(&mut writer).unwrap();

    let text = String::from_utf8(writer.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in lines {
        let (phrase, fitness) = line.split_once('\t').unwrap();
        assert!(phrase.starts_with("Phrase(notes=["));
        assert!(fitness.parse::<f64>().unwrap() >= 0.0);
    }
}

#[test]
fn test_json_corpus_to_results() {
    let corpus_path = temp_path("corpus.json");
    let mut fragments = seed_population();
    // Outside the default 5..=10 note window
    fragments.push(Phrase::from_pitches(&[60, 62], 0.5));
    fragments.push(Phrase::from_pitches(&[60; 11], 0.0625));
    JsonConnector::save(&corpus_path, &fragments).unwrap();

    let corpus = CorpusConfig {
        path: corpus_path.clone(),
        mode: CorpusMode::Bars,
        ..Default::default()
    };
    let seeds = load_corpus(&corpus).unwrap();
    std::fs::remove_file(&corpus_path).ok();
    assert_eq!(seeds, seed_population());

    let app = AppConfig::from_toml_str(
        r#"
        [evolution]
        generations = 2
        seed = 11

        [scoring]
        key_name = "G"
        scale_type = "major"
        "#,
    )
    .unwrap();

    let results: Vec<_> = EvolutionEngine::new(
        app.evolution.clone(),
        seeds,
        app.scoring.fitness(),
        app.scoring.tonality().unwrap(),
    )
    .unwrap()
    .collect::<Result<_>>()
    .unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn test_corpus_with_nothing_in_window() {
    let corpus_path = temp_path("short.json");
    JsonConnector::save(&corpus_path, &[Phrase::from_pitches(&[60, 62, 64], 0.25)]).unwrap();

    let corpus = CorpusConfig {
        path: corpus_path.clone(),
        ..Default::default()
    };
    let result = load_corpus(&corpus);
    std::fs::remove_file(&corpus_path).ok();

    assert!(matches!(result, Err(MelodevoError::Corpus(_))));
}
