use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use argh::FromArgs;

use cdb_materials::archive::{ArchiveIndex, MountOptions};

#[derive(FromArgs, PartialEq, Debug)]
/// mount archives and loose directories, list or extract their contents
#[argh(subcommand, name = "archive")]
pub struct Args {
    #[argh(subcommand)]
    command: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    List(ListArgs),
    Extract(ExtractArgs),
}

#[derive(FromArgs, PartialEq, Debug)]
/// list every file an archive or loose directory makes visible
#[argh(subcommand, name = "list")]
struct ListArgs {
    #[argh(positional)]
    /// a `.ba2`/`.bsa` archive, or a loose data directory
    input: PathBuf,
}

#[derive(FromArgs, PartialEq, Debug)]
/// extract one file (or every file, with no path given) to an output directory
#[argh(subcommand, name = "extract")]
struct ExtractArgs {
    #[argh(positional)]
    /// a `.ba2`/`.bsa` archive, or a loose data directory
    input: PathBuf,
    #[argh(positional)]
    /// destination directory
    output: PathBuf,
    #[argh(option)]
    /// extract only this path (as mounted, e.g. `materials/foo/bar.mat`)
    path: Option<String>,
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        SubCommand::List(c_args) => list(c_args),
        SubCommand::Extract(c_args) => extract(c_args),
    }
}

fn mount_one(input: &std::path::Path) -> Result<ArchiveIndex> {
    let mut index = ArchiveIndex::new();
    index
        .mount(input, &MountOptions::default())
        .with_context(|| format!("mounting {}", input.display()))?;
    Ok(index)
}

fn list(args: ListArgs) -> Result<()> {
    let index = mount_one(&args.input)?;
    let mut paths = index.get_file_list();
    paths.sort_unstable();
    for path in paths {
        println!("{path}");
    }
    Ok(())
}

fn extract(args: ExtractArgs) -> Result<()> {
    let index = mount_one(&args.input)?;
    fs::create_dir_all(&args.output)?;

    let targets: Vec<String> = match &args.path {
        Some(p) => vec![p.clone()],
        None => index.get_file_list().into_iter().map(str::to_string).collect(),
    };

    for path in targets {
        let data = index.extract(&path).with_context(|| format!("extracting {path}"))?;
        let dest = args.output.join(&path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, data).with_context(|| format!("writing {}", dest.display()))?;
    }
    Ok(())
}
