//! `vitae set-photo`: embed an image into a resume file.

use tracing::instrument;

use crate::{cli::SetPhotoArgs, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(resume = %args.resume.display()))]
pub fn execute(args: SetPhotoArgs, output: OutputManager) -> CliResult<()> {
    let resume = super::resume_service().set_photo(&args.resume, &args.image)?;

    output.success(&format!(
        "Photo embedded ({}) -> {}",
        resume.photo_mime(),
        args.resume.display()
    ))?;
    Ok(())
}
