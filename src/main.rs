use clap::Parser;
use refbundle::error::BundleError;
use refbundle::inline_file;
use std::fs;
use std::path::PathBuf;

/// Inline every `$ref` in a JSON or YAML document.
///
/// Internal references (`#/path/to/key`) are looked up in the input document
/// itself; any other reference is loaded as a file relative to the input's
/// directory. The output contains no references.
#[derive(Parser, Debug)]
#[command(name = "refbundle", version)]
struct Cli {
    /// Document to inline
    input: PathBuf,

    /// Write the inlined document here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> miette::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let result = inline_file(&cli.input)?;
    let rendered = result.render()?;

    match cli.output {
        Some(path) => {
            fs::write(&path, &rendered).map_err(|source| BundleError::OutputWrite {
                path: path.clone(),
                source,
            })?;
            println!("Wrote inlined document to {}", path.display());
        }
        None => {
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
