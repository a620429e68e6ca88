//! Hostgroup commands: list, new, edit, remove, show, activate, deactivate

use colored::Colorize;
use hosts_ops::{
    Editor, GroupChange, GroupStore, activate_groups, deactivate_groups, edit_group,
    edit_group_from, list_groups, new_group, new_group_from, remove_groups, show_groups,
};

use crate::error::Result;
use crate::interactive::ReopenPrompt;

/// Run the list command
pub fn run_list(store: &GroupStore) -> Result<()> {
    for summary in list_groups(store) {
        println!("{}", summary);
    }
    Ok(())
}

/// The draft to reopen, if `result` is a rejected body and the user wants another go.
fn reopen_draft(
    result: &hosts_ops::Result<GroupChange>,
    prompt: &dyn ReopenPrompt,
) -> Result<Option<String>> {
    match result {
        Err(hosts_ops::Error::InvalidGroup {
            name,
            draft,
            source,
        }) if prompt.reopen(name, source)? => Ok(Some(draft.clone())),
        _ => Ok(None),
    }
}

fn report_change(name: &str, change: GroupChange) {
    match change {
        GroupChange::Created => println!(
            "{} Created group '{}'. Run {} to enable it.",
            "OK".green().bold(),
            name,
            format!("hosts-manager activate {}", name).cyan()
        ),
        GroupChange::Updated => println!("{} Updated group '{}'.", "OK".green().bold(), name),
        GroupChange::Removed => println!(
            "{} Group '{}' was emptied and has been removed.",
            "OK".green().bold(),
            name
        ),
        GroupChange::Unchanged => println!("No changes to group '{}'.", name),
        GroupChange::Cancelled => println!("Empty group, nothing created."),
    }
}

/// Run the new command
pub fn run_new(
    store: &mut GroupStore,
    name: &str,
    editor: &dyn Editor,
    prompt: &dyn ReopenPrompt,
) -> Result<()> {
    let mut result = new_group(store, name, editor);
    while let Some(draft) = reopen_draft(&result, prompt)? {
        result = new_group_from(store, name, editor, &draft);
    }
    report_change(name, result?);
    Ok(())
}

/// Run the edit command
pub fn run_edit(
    store: &mut GroupStore,
    name: &str,
    editor: &dyn Editor,
    prompt: &dyn ReopenPrompt,
) -> Result<()> {
    let mut result = edit_group(store, name, editor);
    while let Some(draft) = reopen_draft(&result, prompt)? {
        result = edit_group_from(store, name, editor, &draft);
    }
    report_change(name, result?);
    Ok(())
}

/// Run the remove command
pub fn run_remove(store: &mut GroupStore, names: &[String]) -> Result<()> {
    remove_groups(store, names)?;
    println!("{} Removed {}.", "OK".green().bold(), names.join(", "));
    Ok(())
}

/// Run the show command
pub fn run_show(store: &GroupStore, names: &[String]) -> Result<()> {
    print!("{}", show_groups(store, names)?);
    Ok(())
}

/// Run the activate command
pub fn run_activate(store: &mut GroupStore, names: &[String]) -> Result<()> {
    activate_groups(store, names)?;
    println!("{} Activated {}.", "OK".green().bold(), names.join(", "));
    Ok(())
}

/// Run the deactivate command
pub fn run_deactivate(store: &mut GroupStore, names: &[String]) -> Result<()> {
    deactivate_groups(store, names)?;
    println!("{} Deactivated {}.", "OK".green().bold(), names.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::interactive::FixedPrompt;
    use hosts_ops::{HostsGroup, ScriptedEditor};

    fn store() -> GroupStore {
        let mut store = GroupStore::new("unused.json");
        store.upsert(HostsGroup::new("dev", "192.0.2.1 dev.example\n"));
        store
    }

    #[test]
    fn test_new_reopens_rejected_draft() {
        let mut store = GroupStore::new("unused.json");
        let editor = ScriptedEditor::new(["dev.example\n", "192.0.2.1 dev.example\n"]);

        run_new(&mut store, "dev", &editor, &FixedPrompt(true)).unwrap();

        assert_eq!(editor.seen(), vec!["", "dev.example\n"]);
        assert_eq!(store.get("dev").unwrap().body, "192.0.2.1 dev.example\n");
    }

    #[test]
    fn test_new_declined_reports_syntax_error() {
        let mut store = GroupStore::new("unused.json");
        let editor = ScriptedEditor::new(["dev.example\n"]);

        let err = run_new(&mut store, "dev", &editor, &FixedPrompt(false)).unwrap_err();

        assert!(matches!(
            err,
            CliError::Ops(hosts_ops::Error::InvalidGroup { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_reopen_until_valid() {
        let mut store = store();
        let editor = ScriptedEditor::new(["bad\n", "still bad\n", "192.0.2.9 dev.example\n"]);

        run_edit(&mut store, "dev", &editor, &FixedPrompt(true)).unwrap();

        assert_eq!(
            editor.seen(),
            vec!["192.0.2.1 dev.example\n", "bad\n", "still bad\n"]
        );
        assert_eq!(store.get("dev").unwrap().body, "192.0.2.9 dev.example\n");
    }

    #[test]
    fn test_activate_then_show() {
        let mut store = store();
        run_activate(&mut store, &["dev".to_string()]).unwrap();
        assert!(store.get("dev").unwrap().is_active);
        assert!(run_show(&store, &[]).is_ok());
    }

    #[test]
    fn test_remove_unknown() {
        let mut store = store();
        assert!(run_remove(&mut store, &["ghost".to_string()]).is_err());
        assert!(store.exists("dev"));
    }
}
