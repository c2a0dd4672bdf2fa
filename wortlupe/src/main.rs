use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use wortlupe_lib::{breakdown, Engine, Lexicon, NullLemmaLookup, NullSegmenter, Sentence, Token};

#[derive(Parser)]
#[command(name = "wortlupe", about = "German word decomposition and expression detection")]
struct Cli {
    /// The selected word to analyze.
    word: String,

    /// Tagged-sentence JSON file (token array from the external analyzer).
    /// If omitted, reads from stdin.
    #[arg(long)]
    context: Option<String>,

    /// Language code of the sentence.
    #[arg(long, default_value = "de")]
    lang: String,

    /// Translation of the base form; when given, the breakdown line is
    /// printed after the JSON analysis.
    #[arg(long)]
    base_translation: Option<String>,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let raw = match read_context(&cli) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: failed to read context: {e}");
            return ExitCode::FAILURE;
        }
    };
    let tokens: Vec<Token> = match serde_json::from_str(&raw) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("error: invalid tagged-sentence JSON: {e}");
            return ExitCode::FAILURE;
        }
    };
    let sentence = Sentence::new(tokens);

    let lexicon = Lexicon::new();
    let engine = Engine::new(&lexicon, &NullSegmenter, &NullLemmaLookup);
    let analysis = engine.analyze(&cli.word, &sentence, &cli.lang);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&analysis)
    } else {
        serde_json::to_string(&analysis)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: failed to serialize analysis: {e}");
            return ExitCode::FAILURE;
        }
    }

    if let Some(base) = &cli.base_translation {
        if let Some(line) = breakdown::render(&analysis, base) {
            println!("{line}");
        }
    }

    ExitCode::SUCCESS
}

fn read_context(cli: &Cli) -> io::Result<String> {
    match &cli.context {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
