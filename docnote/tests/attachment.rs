//! Integration tests for attaching configs to symbols and resolving them.
use std::sync::Arc;

use anyhow::{Context, Result, ensure};
use docnote::{Attachments, DOCNOTE_CONFIG_ATTR, DocnoteConfig, DocnoteGroup, SymbolPath};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::nodes::node;

#[fixture]
fn package_tree() -> Result<Attachments> {
    let mut attachments = Attachments::new();
    attachments.docnote(
        "shapes",
        Arc::new(node(json!({
            "markup_lang": "cleancopy",
            "enforce_known_lang": true,
            "child_groups": ["geometry", "rendering"],
        }))?),
    );
    attachments.docnote(
        "shapes.circle",
        Arc::new(node(json!({"parent_group_name": "geometry"}))?),
    );
    attachments.docnote(
        "shapes.circle.Circle.area",
        Arc::new(node(json!({"markup_lang": "markdown"}))?),
    );
    Ok(attachments)
}

#[rstest]
fn attachment_round_trip_is_identity() -> Result<()> {
    let mut attachments = Attachments::new();
    let config = Arc::new(DocnoteConfig::new());
    let symbol = attachments.docnote("shapes.Square", Arc::clone(&config));
    let stored = attachments
        .config_for(&symbol)
        .context("config must be attached")?;
    ensure!(Arc::ptr_eq(stored, &config), "attachment returned a different object");
    ensure!(DOCNOTE_CONFIG_ATTR == "_docnote_config");
    Ok(())
}

#[rstest]
fn method_inherits_package_settings(package_tree: Result<Attachments>) -> Result<()> {
    let attachments = package_tree?;
    let effective = attachments
        .chain_for(&SymbolPath::from("shapes.circle.Circle.area"))
        .resolve_effective();
    ensure!(effective.stackables().markup_lang().map(String::from).as_deref() == Some("markdown"));
    ensure!(effective.stackables().enforce_known_lang() == Some(true));
    ensure!(effective.is_inherited("enforce_known_lang"));
    ensure!(effective.parent_group_name().is_none());
    ensure!(effective.child_groups().is_none());
    Ok(())
}

#[rstest]
fn module_is_ordered_by_parent_groups(package_tree: Result<Attachments>) -> Result<()> {
    let attachments = package_tree?;
    let package = attachments
        .config_for(&SymbolPath::from("shapes"))
        .context("package config")?;
    let groups = package.child_groups().context("package declares groups")?;
    let module = attachments
        .config_for(&SymbolPath::from("shapes.circle"))
        .context("module config")?;
    let ordered = groups.order_children([(module.parent_group_name(), "shapes.circle")]);
    ensure!(ordered.unmatched.is_empty());
    let placed: Vec<_> = ordered
        .ordered
        .iter()
        .map(|(group, child)| (group.name(), *child))
        .collect();
    ensure!(placed == [("geometry", "shapes.circle")], "unexpected order {placed:?}");
    Ok(())
}

#[rstest]
fn independent_groups_with_equal_names_differ() {
    let first = DocnoteGroup::new("geometry");
    let second = DocnoteGroup::new("geometry");
    assert_ne!(first, second);
}

#[rstest]
fn chains_resolve_concurrently(package_tree: Result<Attachments>) -> Result<()> {
    let attachments = package_tree?;
    let chain = attachments.chain_for(&SymbolPath::from("shapes.circle.Circle.area"));
    let expected = chain.resolve();
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| chain.resolve())).collect();
        handles.into_iter().map(|handle| handle.join()).collect()
    });
    for result in results {
        let resolved = result.map_err(|_| anyhow::anyhow!("resolver thread panicked"))?;
        ensure!(resolved == expected);
    }
    Ok(())
}
