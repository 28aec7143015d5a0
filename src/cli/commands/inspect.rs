use crate::archive::read_manifest;
use crate::cli::args::InspectArgs;
use crate::error::Result;

pub fn run_inspect_command(args: &InspectArgs) -> Result<()> {
    let manifest = read_manifest(&args.archive)?;
    println!("archive: {}", args.archive.display());
    println!("  backup time: {}", manifest.backup_time);
    println!("  files: {}", manifest.files.len());
    for entry in &manifest.files {
        println!("    {} -> {}", entry.archive_path, entry.original_path);
    }
    Ok(())
}
