use crate::catalog::catalog;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        all,
        force,
    } = cmd
    {
        export::export(catalog(), format, file, range, *all, *force)?;
    }
    Ok(())
}
