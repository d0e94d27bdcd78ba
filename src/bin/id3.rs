use clap::Parser;
use id3_tree::data::dataset::{CategoricalDataset, LabelSet};
use id3_tree::data::table::Table;
use id3_tree::metrics::confusion::ClassificationMetrics;
use id3_tree::trees::{DecisionTreeClassifier, GainConvention, TieBreak};
use id3_tree::Result;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "id3", version, about = "induce a decision tree from a csv file")]
#[command(
    long_about = "induce a decision tree from a csv file whose first column is the example key, \
                  last column is the label and every other column is a categorical attribute"
)]
struct Options {
    /// the path to your .csv file
    #[arg(short, long, default_value = "datasets/restaurant.csv")]
    file: PathBuf,
    /// the label text of positive examples
    #[arg(long, default_value = "yes")]
    positive: String,
    /// the label text of negative examples
    #[arg(long, default_value = "no")]
    negative: String,
    /// information gain baseline, 'unit' or 'entropy'
    #[arg(long, env = "ID3_GAIN", default_value = "unit")]
    gain: GainConvention,
    /// plurality vote tie break, 'lexicographic' or 'random'
    #[arg(long, env = "ID3_TIE_BREAK", default_value = "lexicographic")]
    tie_break: TieBreak,
    /// seed of the random tie break and of the train/test shuffle
    #[arg(long, env = "ID3_SEED")]
    seed: Option<u64>,
    /// reject tables with more attributes than this
    #[arg(long, env = "ID3_MAX_ATTRIBUTES", default_value_t = 64)]
    max_attributes: usize,
    /// hold out this fraction of the rows and report accuracy on it
    #[arg(long)]
    test_size: Option<f64>,
}

fn main() -> ExitCode {
    let env = env_logger::Env::default().default_filter_or("id3_tree=info,id3=info");
    env_logger::Builder::from_env(env)
        .format_module_path(false)
        .format_timestamp(None)
        .init();

    match run(Options::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(options: Options) -> Result<()> {
    let table = Table::from_path(&options.file)?;
    log::info!(
        "loaded {} examples with {} attributes from {}",
        table.len(),
        table.attribute_names().len(),
        options.file.display()
    );

    let label_set = LabelSet::new(options.positive, options.negative)?;
    let (train, test) = match options.test_size {
        Some(test_size) => {
            let (train, test) = table.train_test_split(1.0 - test_size, options.seed)?;
            (train, Some(test))
        }
        None => (table, None),
    };

    let dataset = CategoricalDataset::from_table(&train, label_set.clone())?;
    let mut classifier = DecisionTreeClassifier::with_params(
        Some(options.gain),
        Some(options.tie_break.with_seed(options.seed)),
        Some(options.max_attributes),
    )?;
    log::info!("{}", classifier.fit(&dataset)?);

    print!("{}", classifier);

    let (name, evaluated) = match &test {
        Some(test) => ("test", test),
        None => ("training", &train),
    };
    if evaluated.is_empty() {
        log::warn!("no {} examples to evaluate", name);
        return Ok(());
    }
    let truth = label_set.labels(evaluated)?;
    let predictions = classifier.predict(evaluated)?;
    println!(
        "\n{} accuracy: {:.2}%",
        name,
        classifier.accuracy(&truth, &predictions)? * 100.0
    );

    Ok(())
}
