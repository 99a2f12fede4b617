pub mod archive;
pub mod material;

use argh::FromArgs;

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum SubCommand {
    Archive(archive::Args),
    Material(material::Args),
}
