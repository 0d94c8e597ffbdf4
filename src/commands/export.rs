//! History export to a file, stdout or the clipboard.

use crate::{
    libs::{
        config::Config,
        export::{copy_to_clipboard, render_text, ExportFormat, Exporter},
        messages::Message,
        store::StateStore,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file, `meeting-history-YYYY-MM-DD.<ext>` when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Copy to the clipboard instead of writing a file
    #[arg(short, long)]
    copy: bool,

    /// Export only the most recent meeting
    #[arg(short, long)]
    latest: bool,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let history = StateStore::new()?.load_history(config.limits().max_history)?;

    let summaries = match (args.latest, history.latest()) {
        (_, None) => {
            msg_info!(Message::NothingToExport);
            return Ok(());
        }
        (true, Some(latest)) => std::slice::from_ref(latest),
        (false, Some(_)) => history.entries(),
    };

    if args.stdout {
        let text = render_text(args.format, summaries)?;
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }

    if args.copy {
        let text = render_text(args.format, summaries)?;
        match copy_to_clipboard(&text) {
            Ok(()) => msg_success!(Message::ExportCopied),
            Err(e) => {
                debug!(error = %e, "clipboard copy failed");
                msg_warning!(Message::ClipboardUnavailable(e.to_string()));
            }
        }
    }

    if args.output.is_some() || !(args.stdout || args.copy) {
        let path = Exporter::new(args.format, args.output).export(summaries)?;
        msg_success!(Message::ExportCompleted(path.display().to_string()));
    }

    Ok(())
}
