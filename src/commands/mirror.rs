use anyhow::Result;

use crate::commands::sync::{apply_indexer_flags, run_plan};
use crate::core::{AutoConfirm, Config, SyncPlan};
use crate::ui::StdinConfirmer;

/// `ipodsync mirror`: whole share onto the whole music folder.
/// Asks for the confirmation word unless `--yes` is given.
pub fn execute(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    let assume_yes = matches.get_flag("yes");
    let plan = apply_indexer_flags(SyncPlan::mirror(config), matches)?;

    if assume_yes {
        run_plan(&plan, config, &mut AutoConfirm)
    } else {
        run_plan(&plan, config, &mut StdinConfirmer)
    }
}
