use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use ipa_annotate::{
    annotate::{Annotator, Span},
    config::StoreConfig,
    dictionary::{DictionaryError, DictionaryStore},
    source::DirectorySource,
    tokenizer::{Run, Tokenize},
};

/// Exit status when a looked-up word has no transcription.
const EXIT_WORD_NOT_FOUND: i32 = 1;
/// Exit status when the language has no dictionary.
const EXIT_NO_DICTIONARY: i32 = 2;

trait OutputWriter {
    fn write_languages(&mut self, languages: &[String]);
    fn write_spans(&mut self, spans: &[Span]);
    fn write_lookup(&mut self, word: &str, transcription: Option<&str>);
    fn write_runs(&mut self, runs: &[(usize, Run)]);
    fn write_words(&mut self, words: &[&str]);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_languages(&mut self, languages: &[String]) {
        for lang in languages {
            println!("{}", lang);
        }
    }

    fn write_spans(&mut self, spans: &[Span]) {
        for span in spans {
            match span.transcription() {
                Some(ipa) => println!("{:?}\t{}", span.text(), ipa),
                None => println!("{:?}", span.text()),
            }
        }
    }

    fn write_lookup(&mut self, word: &str, transcription: Option<&str>) {
        match transcription {
            Some(ipa) => println!("{}\t{}", word, ipa),
            None => println!("{}\t[NOT FOUND]", word),
        }
    }

    fn write_runs(&mut self, runs: &[(usize, Run)]) {
        for (index, run) in runs {
            println!("{:>4}: {:?}", index, run.as_str());
        }
    }

    fn write_words(&mut self, words: &[&str]) {
        for word in words {
            println!("{:?}", word);
        }
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct LookupResult {
    word: String,
    ipa: Option<String>,
}

#[derive(Serialize)]
struct RunResult {
    offset: usize,
    text: String,
    word: bool,
}

#[derive(Default, Serialize)]
struct JsonWriter {
    #[serde(skip_serializing_if = "Option::is_none")]
    languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spans: Option<Vec<Span>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lookup: Option<LookupResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    runs: Option<Vec<RunResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<String>>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        Self::default()
    }
}

impl OutputWriter for JsonWriter {
    fn write_languages(&mut self, languages: &[String]) {
        self.languages = Some(languages.to_vec());
    }

    fn write_spans(&mut self, spans: &[Span]) {
        self.spans = Some(spans.to_vec());
    }

    fn write_lookup(&mut self, word: &str, transcription: Option<&str>) {
        self.lookup = Some(LookupResult {
            word: word.to_string(),
            ipa: transcription.map(str::to_string),
        });
    }

    fn write_runs(&mut self, runs: &[(usize, Run)]) {
        self.runs = Some(
            runs.iter()
                .map(|(offset, run)| RunResult {
                    offset: *offset,
                    text: run.as_str().to_string(),
                    word: run.is_word(),
                })
                .collect(),
        );
    }

    fn write_words(&mut self, words: &[&str]) {
        self.words = Some(words.iter().map(|w| w.to_string()).collect());
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize output: {}", e),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ipa-annotate",
    about = "Annotate text with IPA transcriptions from pronunciation dictionaries",
    arg_required_else_help = true
)]
struct Args {
    /// Directory containing one <lang>.json dictionary per language
    #[arg(long, global = true, env = "IPA_DICT_DIR", value_name = "DIR")]
    dict_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long = "json", global = true)]
    use_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the languages with an available dictionary
    Languages,

    /// Annotate text with transcriptions
    Annotate(AnnotateArgs),

    /// Look up the transcription of a single word
    Lookup(LookupArgs),

    /// Print input split into word and non-word runs
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Parser)]
struct AnnotateArgs {
    /// Language code, e.g. en_US or zh_hans
    #[arg(short, long)]
    lang: String,

    /// Text to be annotated; read from stdin when omitted
    inputs: Vec<String>,
}

#[derive(Debug, Parser)]
struct LookupArgs {
    /// Language code, e.g. en_US or zh_hans
    #[arg(short, long)]
    lang: String,

    /// Word to look up
    word: String,
}

#[derive(Debug, Parser)]
struct TokenizeArgs {
    /// Show words only
    #[arg(short = 'w', long = "words")]
    is_words_only: bool,

    /// Text to be tokenized; read from stdin when omitted
    inputs: Vec<String>,
}

fn read_inputs(inputs: Vec<String>) -> io::Result<String> {
    if inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(inputs.join(" "))
    }
}

fn language_arg(lang: &str) -> anyhow::Result<&str> {
    let lang = lang.trim();
    if lang.is_empty() {
        anyhow::bail!("Missing or invalid language code");
    }
    Ok(lang)
}

fn store_config(dict_dir: Option<PathBuf>) -> StoreConfig {
    match dict_dir {
        Some(dictionary_dir) => StoreConfig { dictionary_dir },
        None => StoreConfig::default(),
    }
}

fn report_missing(e: &DictionaryError) -> i32 {
    eprintln!("{}", e);
    EXIT_NO_DICTIONARY
}

fn annotate(
    annotator: &Annotator<DirectorySource>,
    args: AnnotateArgs,
    writer: &mut dyn OutputWriter,
) -> anyhow::Result<i32> {
    let lang = language_arg(&args.lang)?;
    let text = read_inputs(args.inputs)?;

    match annotator.annotate(lang, &text) {
        Ok(spans) => {
            writer.write_spans(&spans);
            Ok(0)
        }
        Err(e) => Ok(report_missing(&e)),
    }
}

fn lookup(
    store: &DictionaryStore<DirectorySource>,
    args: LookupArgs,
    writer: &mut dyn OutputWriter,
) -> anyhow::Result<i32> {
    let lang = language_arg(&args.lang)?;

    match store.lookup(lang, &args.word) {
        Ok(ipa) => {
            writer.write_lookup(args.word.trim(), ipa.as_deref());
            Ok(if ipa.is_some() { 0 } else { EXIT_WORD_NOT_FOUND })
        }
        Err(e) => Ok(report_missing(&e)),
    }
}

fn tokenize(args: TokenizeArgs, writer: &mut dyn OutputWriter) -> anyhow::Result<i32> {
    let inputs = read_inputs(args.inputs)?;

    if args.is_words_only {
        writer.write_words(&inputs.words().collect::<Vec<_>>());
    } else {
        writer.write_runs(&inputs.word_runs().collect::<Vec<_>>());
    }

    Ok(0)
}

/// Runs one command and returns the process exit status.
fn run(args: Args) -> anyhow::Result<i32> {
    let config = store_config(args.dict_dir);
    log::debug!("Dictionary directory: {}", config.dictionary_dir.display());

    let store = Arc::new(DictionaryStore::new(DirectorySource::from_config(&config)));
    let annotator = Annotator::new(Arc::clone(&store));

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let status = match args.command {
        Command::Languages => {
            writer.write_languages(&store.list_languages());
            0
        }
        Command::Annotate(args) => annotate(&annotator, args, &mut *writer)?,
        Command::Lookup(args) => lookup(&store, args, &mut *writer)?,
        Command::Tokenize(args) => tokenize(args, &mut *writer)?,
    };

    if status != EXIT_NO_DICTIONARY {
        writer.finish();
    }

    Ok(status)
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let status = run(Args::parse())?;
    if status != 0 {
        process::exit(status);
    }

    Ok(())
}
