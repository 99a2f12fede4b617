use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use argh::FromArgs;

use cdb_materials::cdb::{json_export, project, ComponentDatabase};
use cdb_materials::resource_id::ResourceId;

#[derive(FromArgs, PartialEq, Debug)]
/// load a component database or standalone material file and inspect it
#[argh(subcommand, name = "material")]
pub struct Args {
    #[argh(subcommand)]
    command: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    Json(JsonArgs),
    Load(LoadArgs),
    Info(InfoArgs),
}

#[derive(FromArgs, PartialEq, Debug)]
/// dump every material in a `.cdb`/`.mat` file as JSON
#[argh(subcommand, name = "json")]
struct JsonArgs {
    #[argh(positional)]
    /// a `materialsbeta.cdb` or standalone `.mat` reflection stream
    input: PathBuf,
}

#[derive(FromArgs, PartialEq, Debug)]
/// load a database, apply a JSON override document on top, and dump the result
#[argh(subcommand, name = "load")]
struct LoadArgs {
    #[argh(positional)]
    /// the reflection-stream database to load first
    database: PathBuf,
    #[argh(positional)]
    /// the JSON document to ingest on top of it
    json: PathBuf,
}

#[derive(FromArgs, PartialEq, Debug)]
/// print the typed CE2Material projection of one object
#[argh(subcommand, name = "info")]
struct InfoArgs {
    #[argh(positional)]
    /// the reflection-stream database to load
    database: PathBuf,
    #[argh(positional)]
    /// a `res:DDDDDDDD:FFFFFFFF:EEEEEEEE` id or a data-relative path (e.g. `materials/foo/bar.mat`)
    object: String,
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        SubCommand::Json(c_args) => json(c_args),
        SubCommand::Load(c_args) => load(c_args),
        SubCommand::Info(c_args) => info(c_args),
    }
}

fn load_database(path: &std::path::Path) -> Result<ComponentDatabase> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let mut db = ComponentDatabase::new();
    db.load(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(db)
}

fn resolve_object_id(s: &str) -> ResourceId {
    ResourceId::from_res_string(s).unwrap_or_else(|| ResourceId::from_path(s))
}

fn json(args: JsonArgs) -> Result<()> {
    let db = load_database(&args.input)?;
    println!("{}", json_export::to_json(&db));
    Ok(())
}

fn load(args: LoadArgs) -> Result<()> {
    let mut db = load_database(&args.database)?;
    let text = fs::read_to_string(&args.json).with_context(|| format!("reading {}", args.json.display()))?;
    let material_path = args.json.to_string_lossy().replace('\\', "/");
    cdb_materials::json::ingest::load_json_file(&mut db, &text, &material_path)
        .with_context(|| format!("ingesting {}", args.json.display()))?;
    println!("{}", json_export::to_json(&db));
    Ok(())
}

fn info(args: InfoArgs) -> Result<()> {
    let db = load_database(&args.database)?;
    let rid = resolve_object_id(&args.object);
    let Some(id) = db.object_by_resource_id(rid) else {
        bail!("no object found for {}", rid);
    };
    let material = project::project(&db, id);
    println!("{material:#?}");
    Ok(())
}
