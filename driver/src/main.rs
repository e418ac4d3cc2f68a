mod pipeline;

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::{Parser, ValueEnum}; // clap crate for CLI argument parsing
use model::{dump_program, dump_tokens, Dialect};
use pipeline::Pipeline;
use semantic::SemanticOptions;

#[derive(Parser, Debug)]
#[command(name = "mini-lang", version, about = "Transpile mini-lang source to Python", long_about = None)]
struct Args {
    /// Path to the mini-lang source file
    #[arg(default_value = "teste.ml")]
    input_path: PathBuf,

    /// Where to write the generated Python
    #[arg(short, long, default_value = "saida.py")]
    output: PathBuf,

    /// Print the token stream and stop
    #[arg(short, long)]
    tokens: bool,

    /// Print the syntax tree and stop
    #[arg(short, long)]
    ast: bool,

    /// Grammar to accept
    #[arg(long, value_enum, default_value_t = DialectArg::Extended)]
    dialect: DialectArg,

    /// Semantic checks to run
    #[arg(long, value_enum, default_value_t = CheckArg::Full)]
    check: CheckArg,

    /// Allow calls to functions defined later in the file
    #[arg(long)]
    forward_calls: bool,

    /// Report each stage on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DialectArg {
    Base,
    Extended,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CheckArg {
    /// Variable scopes only
    Scopes,
    /// Function table only
    Functions,
    /// Both
    Full,
}

impl Args {
    fn pipeline(&self) -> Pipeline {
        let dialect = match self.dialect {
            DialectArg::Base => Dialect::Base,
            DialectArg::Extended => Dialect::Extended,
        };
        let mut semantic = match self.check {
            CheckArg::Scopes => SemanticOptions::scope_checking(),
            CheckArg::Functions => SemanticOptions::function_table(),
            CheckArg::Full => SemanticOptions::default(),
        };
        semantic.forward_calls = self.forward_calls;
        Pipeline { dialect, semantic }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let pipeline = args.pipeline();

    let source = fs::read_to_string(&args.input_path)
        .with_context(|| format!("failed to read '{}'", args.input_path.display()))?;
    if args.verbose {
        eprintln!("read {} bytes from {}", source.len(), args.input_path.display());
    }

    let tokens = pipeline.tokenize(&source)?;
    if args.verbose {
        eprintln!("lexed {} tokens", tokens.len());
    }

    // --tokens: dump and stop before parsing
    if args.tokens {
        print!("{}", dump_tokens(&tokens));
        return Ok(());
    }

    let program = pipeline.parse(&tokens)?;
    if args.verbose {
        eprintln!("parsed {} top-level statements", program.statements.len());
    }

    // --ast: dump and stop before analysis
    if args.ast {
        print!("{}", dump_program(&program));
        return Ok(());
    }

    let code = pipeline.generate(&program)?;

    fs::write(&args.output, &code)
        .with_context(|| format!("failed to write '{}'", args.output.display()))?;
    if args.verbose {
        eprintln!("wrote {} bytes to {}", code.len(), args.output.display());
    }
    println!("Generated {}", args.output.display());
    Ok(())
}
