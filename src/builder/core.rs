use std::mem;

use serde::Serialize;
use serde_json::{Value, json};

use crate::anchor::{ConstraintDescriptor, ItemId, LayoutItem};
use crate::compiler::{compile_with, validate};
use crate::config::BuilderConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{LayoutError, Result};
use crate::host::{ActivationSummary, ConstraintHost};
use crate::logging::{
    COMPILER_TARGET, LogLevel, METRICS_TARGET, event_with_fields, json_kv, json_str,
};
use crate::spec::{
    ConnectorOrder, ConnectorType, HorizontalConnector, LayoutSpec, VerticalConnector,
};

use super::stack::{StackAxis, StackSession, adjacent_connectors};

/// Sequential identifier assigned to every entry a builder registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryTag(u32);

impl EntryTag {
    pub fn index(self) -> u32 {
        self.0
    }
}

/// One `(item, spec)` pairing accumulated by the builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub tag: EntryTag,
    pub item: ItemId,
    pub spec: LayoutSpec,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum BuilderState {
    #[default]
    Empty,
    Editing(Entry),
}

/// Single-use accumulator of layout intents for one layout pass.
///
/// Calls chain by value. The most recent `with` stays *pending* and keeps
/// receiving connectors until the next `with` or `build` commits it. Requests that cannot be resolved are skipped and recorded in
/// [`diagnostics`](Self::diagnostics).
///
/// ```
/// use anchor_layout::{ConnectorType, FluentLayoutBuilder, Insets, ItemId, LayoutSpec};
///
/// let (header, title, subtitle) = (ItemId::new(1), ItemId::new(2), ItemId::new(3));
/// let edges = || LayoutSpec::new([ConnectorType::Leading, ConnectorType::Trailing]);
///
/// let entries = FluentLayoutBuilder::new()
///     .with(header, LayoutSpec::fill(Insets::uniform(8.0)))
///     .start_stack()
///     .with(title, edges())
///     .with(subtitle, edges())
///     .stack_v(12.0)
///     .build();
/// assert_eq!(entries.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct FluentLayoutBuilder {
    entries: Vec<Entry>,
    state: BuilderState,
    session: Option<StackSession>,
    next_tag: u32,
    diagnostics: Diagnostics,
    config: BuilderConfig,
}

impl FluentLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register `item` with `spec` as the new pending entry.
    ///
    /// A fixed size adds the `Width`/`Height` connectors it implies.
    pub fn with(mut self, item: impl LayoutItem, mut spec: LayoutSpec) -> Self {
        spec.extend_for_size();
        self.commit_pending();

        let tag = EntryTag(self.next_tag);
        self.next_tag += 1;
        self.state = BuilderState::Editing(Entry {
            tag,
            item: item.item_id(),
            spec,
        });
        self
    }

    /// Attach a vertical connector to the pending entry.
    pub fn vertical(
        mut self,
        top: impl LayoutItem,
        bottom: impl LayoutItem,
        spacing: f64,
        order: ConnectorOrder,
    ) -> Self {
        let connector = VerticalConnector::new(top, bottom, spacing, order);
        self.attach(ConnectorType::Vertical(connector), "vertical");
        self
    }

    /// Attach a horizontal connector to the pending entry.
    pub fn horizontal(
        mut self,
        leading: impl LayoutItem,
        trailing: impl LayoutItem,
        spacing: f64,
        order: ConnectorOrder,
    ) -> Self {
        let connector = HorizontalConnector::new(leading, trailing, spacing, order);
        self.attach(ConnectorType::Horizontal(connector), "horizontal");
        self
    }

    /// Place `from` (default: pending item) below `to` (default: last
    /// committed item).
    pub fn link_v(self, from: Option<ItemId>, to: Option<ItemId>, spacing: f64) -> Self {
        match self.resolve_link(from, to, "link_v") {
            (builder, Some((from, to))) => {
                builder.vertical(from, to, spacing, ConnectorOrder::BottomThenTop)
            }
            (builder, None) => builder,
        }
    }

    /// Place `from` (default: pending item) after `to` (default: last
    /// committed item).
    pub fn link_h(self, from: Option<ItemId>, to: Option<ItemId>, spacing: f64) -> Self {
        match self.resolve_link(from, to, "link_h") {
            (builder, Some((from, to))) => {
                builder.horizontal(from, to, spacing, ConnectorOrder::TrailingThenLeading)
            }
            (builder, None) => builder,
        }
    }

    /// Open a new stack session. Every entry committed from here on, plus
    /// the entry pending when the stack closes, is chained by the next
    /// `stack_v`/`stack_h`.
    ///
    /// The pending entry is left alone, so it joins the session once the
    /// next `with` commits it.
    pub fn start_stack(mut self) -> Self {
        self.session = Some(StackSession::default());
        self
    }

    pub fn stack_v(self, spacing: f64) -> Self {
        self.close_stack(StackAxis::Vertical, spacing)
    }

    pub fn stack_h(self, spacing: f64) -> Self {
        self.close_stack(StackAxis::Horizontal, spacing)
    }

    /// Commit the pending entry and return every entry in registration order.
    pub fn build(mut self) -> Vec<Entry> {
        self.commit_pending();
        self.entries
    }

    /// Like [`build`](Self::build), but fails if any request was skipped,
    /// including connectors the compiler would drop.
    pub fn try_build(mut self) -> Result<Vec<Entry>> {
        self.commit_pending();
        for entry in &self.entries {
            validate(entry.item, &entry.spec, &mut self.diagnostics);
        }
        if self.diagnostics.is_empty() {
            Ok(self.entries)
        } else {
            Err(LayoutError::Unresolved(self.diagnostics.into_vec()))
        }
    }

    /// Build, compile every entry against `container`, and activate the
    /// result on `host` as one batch.
    ///
    /// Skipped requests are logged and left out of the batch; use
    /// [`try_apply`](Self::try_apply) to refuse the whole pass instead.
    pub fn apply<H>(mut self, container: impl LayoutItem, host: &mut H) -> Result<ActivationSummary>
    where
        H: ConstraintHost + ?Sized,
    {
        let container = container.item_id();
        let batch = self.compile_batch(container);
        self.activate_batch(container, &batch, host)
    }

    /// Like [`apply`](Self::apply), but activates nothing and returns
    /// [`LayoutError::Unresolved`] if any request was skipped.
    pub fn try_apply<H>(
        mut self,
        container: impl LayoutItem,
        host: &mut H,
    ) -> Result<ActivationSummary>
    where
        H: ConstraintHost + ?Sized,
    {
        let container = container.item_id();
        let batch = self.compile_batch(container);
        if !self.diagnostics.is_empty() {
            return Err(LayoutError::Unresolved(self.diagnostics.into_vec()));
        }
        self.activate_batch(container, &batch, host)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn pending(&self) -> Option<&Entry> {
        match &self.state {
            BuilderState::Editing(entry) => Some(entry),
            BuilderState::Empty => None,
        }
    }

    pub fn is_stacking(&self) -> bool {
        self.session.is_some()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn commit_pending(&mut self) {
        if let BuilderState::Editing(entry) = mem::take(&mut self.state) {
            if let Some(session) = self.session.as_mut() {
                session.track(entry.tag);
            }
            self.emit(LogLevel::Trace, "entry_committed", [
                json_kv("tag", entry.tag.index()),
                json_kv("item", entry.item.raw()),
                json_kv("connectors", entry.spec.connectors().len()),
            ]);
            self.entries.push(entry);
        }
    }

    /// Commit pending and compile every entry, folding compiler skips into
    /// the builder's diagnostics.
    fn compile_batch(&mut self, container: ItemId) -> Vec<ConstraintDescriptor> {
        self.commit_pending();
        let mut batch = Vec::new();
        for entry in &self.entries {
            let mut skipped = Diagnostics::new();
            let descriptors = compile_with(entry.item, container, &entry.spec, &mut skipped);
            self.config
                .with_metrics(|metrics| metrics.record_compile(descriptors.len(), skipped.len()));
            for diagnostic in &skipped {
                self.emit_to(COMPILER_TARGET, self.config.level, "request_skipped", [
                    json_str("reason", diagnostic.to_string()),
                ]);
            }
            self.diagnostics.extend(skipped);
            batch.extend(descriptors);
        }
        batch
    }

    fn activate_batch<H>(
        &self,
        container: ItemId,
        batch: &[ConstraintDescriptor],
        host: &mut H,
    ) -> Result<ActivationSummary>
    where
        H: ConstraintHost + ?Sized,
    {
        let summary = host.activate(batch)?;
        self.config.with_metrics(|metrics| metrics.record_batch());
        self.emit(LogLevel::Info, "batch_applied", [
            json_kv("container", container.raw()),
            json_kv("entries", self.entries.len()),
            json_kv("activated", summary.activated),
            json_kv("replaced", summary.replaced),
            json_kv("skipped", self.diagnostics.len()),
        ]);
        if let (Some(logger), Some(handle)) = (&self.config.logger, &self.config.metrics) {
            if let Ok(metrics) = handle.lock() {
                let _ = logger.log_event(metrics.snapshot().to_log_event(METRICS_TARGET));
            }
        }
        Ok(summary)
    }

    fn attach(&mut self, connector: ConnectorType, operation: &'static str) {
        match &mut self.state {
            BuilderState::Editing(entry) => entry.spec.push_connector(connector),
            BuilderState::Empty => self.skip(Diagnostic::NoPendingEntry { operation }),
        }
    }

    fn resolve_link(
        mut self,
        from: Option<ItemId>,
        to: Option<ItemId>,
        operation: &'static str,
    ) -> (Self, Option<(ItemId, ItemId)>) {
        let Some(from) = from.or_else(|| self.pending().map(|entry| entry.item)) else {
            self.skip(Diagnostic::NoPendingEntry { operation });
            return (self, None);
        };
        let Some(to) = to.or_else(|| self.entries.last().map(|entry| entry.item)) else {
            self.skip(Diagnostic::NoPreviousEntry { operation });
            return (self, None);
        };
        (self, Some((from, to)))
    }

    fn close_stack(mut self, axis: StackAxis, spacing: f64) -> Self {
        let operation = axis.operation();
        let Some(session) = self.session.take() else {
            self.skip(Diagnostic::StackSessionClosed { operation });
            self.commit_pending();
            return self;
        };

        let mut members: Vec<ItemId> = self
            .entries
            .iter()
            .filter(|entry| session.contains(entry.tag))
            .map(|entry| entry.item)
            .collect();
        if let Some(entry) = self.pending() {
            members.push(entry.item);
        }

        // Two or more members imply a pending entry: nothing commits it
        // while a session is open except a later `with`.
        let connectors = adjacent_connectors(&members, axis, spacing);
        if connectors.is_empty() {
            return self;
        }

        self.emit(LogLevel::Debug, "stack_closed", [
            json_str("axis", operation),
            json_kv("members", members.len()),
            json_kv("spacing", spacing),
        ]);
        for connector in connectors {
            self.attach(connector, operation);
        }
        self
    }

    fn skip(&mut self, diagnostic: Diagnostic) {
        self.emit(self.config.level, "request_skipped", [json_str(
            "reason",
            diagnostic.to_string(),
        )]);
        self.config.with_metrics(|metrics| metrics.record_skipped(1));
        self.diagnostics.push(diagnostic);
    }

    fn emit<const N: usize>(&self, level: LogLevel, message: &str, fields: [(String, Value); N]) {
        self.emit_to(&self.config.log_target, level, message, fields);
    }

    fn emit_to<const N: usize>(
        &self,
        target: &str,
        level: LogLevel,
        message: &str,
        fields: [(String, Value); N],
    ) {
        if let Some(logger) = &self.config.logger {
            let _ = logger.log_event(event_with_fields(level, target, message, fields));
        }
    }
}

impl Entry {
    /// Summary used in log fields and debug dumps.
    pub fn to_json(&self) -> Value {
        json!({
            "tag": self.tag.index(),
            "item": self.item.raw(),
            "connectors": self
                .spec
                .connectors()
                .iter()
                .map(ConnectorType::label)
                .collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::Attribute;
    use crate::compiler::compile;
    use crate::host::Scene;
    use crate::logging::{Logger, MemorySink};
    use crate::spec::{Insets, SizeSpec};

    const A: ItemId = ItemId::new(1);
    const B: ItemId = ItemId::new(2);
    const C: ItemId = ItemId::new(3);
    const D: ItemId = ItemId::new(4);
    const ROOT: ItemId = ItemId::new(100);

    fn edges() -> LayoutSpec {
        LayoutSpec::new([ConnectorType::Leading, ConnectorType::Trailing])
    }

    fn items(entries: &[Entry]) -> Vec<ItemId> {
        entries.iter().map(|entry| entry.item).collect()
    }

    fn extra_connectors(entry: &Entry) -> Vec<ConnectorType> {
        entry
            .spec
            .connectors()
            .iter()
            .copied()
            .filter(|connector| {
                matches!(
                    connector,
                    ConnectorType::Vertical(_) | ConnectorType::Horizontal(_)
                )
            })
            .collect()
    }

    #[test]
    fn with_commits_previous_entry_and_assigns_tags() {
        let builder = FluentLayoutBuilder::new()
            .with(A, LayoutSpec::default())
            .with(B, LayoutSpec::default());
        assert_eq!(items(builder.entries()), vec![A]);
        assert_eq!(builder.pending().map(|entry| entry.item), Some(B));

        let entries = builder.build();
        assert_eq!(items(&entries), vec![A, B]);
        assert_eq!(
            entries.iter().map(|e| e.tag.index()).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn with_extends_connectors_for_size() {
        let entries = FluentLayoutBuilder::new()
            .with(A, LayoutSpec::default().with_size(SizeSpec::Equal(64.0)))
            .build();
        assert_eq!(
            entries[0].spec.connectors(),
            &[ConnectorType::Width, ConnectorType::Height]
        );
        let equations: Vec<_> = compile(A, ROOT, &entries[0].spec)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(equations, vec!["#1.width = 64", "#1.height = 64"]);
    }

    #[test]
    fn stack_v_chains_session_members() {
        let builder = FluentLayoutBuilder::new()
            .with(A, LayoutSpec::default())
            .with(B, LayoutSpec::default())
            .start_stack()
            .with(C, edges())
            .with(D, edges())
            .stack_v(12.0);
        assert!(!builder.is_stacking());
        assert!(builder.diagnostics().is_empty());

        let entries = builder.build();
        assert_eq!(items(&entries), vec![A, B, C, D]);
        assert!(extra_connectors(&entries[1]).is_empty());
        assert!(extra_connectors(&entries[2]).is_empty());
        // B was still pending when the stack opened, so it is chained too
        assert_eq!(
            extra_connectors(&entries[3]),
            vec![
                ConnectorType::Vertical(VerticalConnector::new(
                    C,
                    B,
                    12.0,
                    ConnectorOrder::TopThenBottom,
                )),
                ConnectorType::Vertical(VerticalConnector::new(
                    D,
                    C,
                    12.0,
                    ConnectorOrder::TopThenBottom,
                )),
            ]
        );

        let equations: Vec<_> = compile(D, ROOT, &entries[3].spec)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(equations.contains(&"#3.top = #2.bottom + 12".to_string()));
        assert!(equations.contains(&"#4.top = #3.bottom + 12".to_string()));
    }

    #[test]
    fn stack_members_are_entries_committed_while_open() {
        let entries = FluentLayoutBuilder::new()
            .with(A, LayoutSpec::default())
            .with(B, LayoutSpec::default())
            .start_stack()
            .with(C, LayoutSpec::default())
            .stack_h(4.0)
            .build();
        assert_eq!(items(&entries), vec![A, B, C]);
        assert_eq!(
            extra_connectors(&entries[2]),
            vec![ConnectorType::Horizontal(HorizontalConnector::new(
                C,
                B,
                4.0,
                ConnectorOrder::LeadingThenTrailing
            ))]
        );

        let lone = FluentLayoutBuilder::new()
            .with(A, LayoutSpec::default())
            .start_stack()
            .stack_v(4.0);
        assert!(lone.diagnostics().is_empty());
        assert!(extra_connectors(lone.pending().unwrap()).is_empty());
    }

    #[test]
    fn stack_h_chains_every_adjacent_pair() {
        let entries = FluentLayoutBuilder::new()
            .start_stack()
            .with(A, LayoutSpec::default())
            .with(B, LayoutSpec::default())
            .with(C, LayoutSpec::default())
            .stack_h(4.0)
            .build();
        assert_eq!(items(&entries), vec![A, B, C]);
        assert_eq!(
            extra_connectors(&entries[2]),
            vec![
                ConnectorType::Horizontal(HorizontalConnector::new(
                    B,
                    A,
                    4.0,
                    ConnectorOrder::LeadingThenTrailing
                )),
                ConnectorType::Horizontal(HorizontalConnector::new(
                    C,
                    B,
                    4.0,
                    ConnectorOrder::LeadingThenTrailing
                )),
            ]
        );
    }

    #[test]
    fn stack_without_session_only_commits_pending() {
        let builder = FluentLayoutBuilder::new()
            .with(A, edges())
            .with(B, edges())
            .stack_v(8.0);
        assert!(builder.pending().is_none());
        assert_eq!(items(builder.entries()), vec![A, B]);
        assert_eq!(
            builder.diagnostics().as_slice(),
            &[Diagnostic::StackSessionClosed {
                operation: "stack_v"
            }]
        );

        let entries = builder.build();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| extra_connectors(entry).is_empty()));
    }

    #[test]
    fn link_on_empty_builder_is_noop() {
        let builder = FluentLayoutBuilder::new()
            .link_v(None, None, 8.0)
            .link_h(None, None, 8.0);
        assert!(builder.entries().is_empty());
        assert!(builder.pending().is_none());
        assert_eq!(builder.diagnostics().len(), 2);
        assert!(builder.build().is_empty());
    }

    #[test]
    fn link_without_previous_entry_is_noop() {
        let builder = FluentLayoutBuilder::new().with(A, edges()).link_v(None, None, 8.0);
        assert_eq!(
            builder.diagnostics().as_slice(),
            &[Diagnostic::NoPreviousEntry { operation: "link_v" }]
        );
        assert!(extra_connectors(builder.pending().unwrap()).is_empty());
    }

    #[test]
    fn link_v_places_pending_below_previous() {
        let entries = FluentLayoutBuilder::new()
            .with(A, edges())
            .with(B, edges())
            .link_v(None, None, 8.0)
            .build();
        let equations: Vec<_> = compile(B, ROOT, &entries[1].spec)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(equations.contains(&"#1.bottom = #2.top - 8".to_string()));
    }

    #[test]
    fn link_h_places_pending_after_previous() {
        let entries = FluentLayoutBuilder::new()
            .with(A, LayoutSpec::default())
            .with(B, LayoutSpec::default())
            .link_h(None, None, 6.0)
            .build();
        let equations: Vec<_> = compile(B, ROOT, &entries[1].spec)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(equations, vec!["#1.trailing = #2.leading - 6"]);
    }

    #[test]
    fn explicit_connector_needs_pending_entry() {
        let builder = FluentLayoutBuilder::new().vertical(A, B, 4.0, ConnectorOrder::TopThenBottom);
        assert_eq!(
            builder.diagnostics().as_slice(),
            &[Diagnostic::NoPendingEntry {
                operation: "vertical"
            }]
        );
        assert!(builder.build().is_empty());
    }

    #[test]
    fn try_build_surfaces_skipped_requests() {
        let result = FluentLayoutBuilder::new()
            .with(A, edges())
            .stack_h(2.0)
            .try_build();
        assert!(matches!(result, Err(LayoutError::Unresolved(ref found)) if found.len() == 1));

        let clean = FluentLayoutBuilder::new().with(A, edges()).try_build().unwrap();
        assert_eq!(clean.len(), 1);
    }

    #[test]
    fn try_build_surfaces_unresolvable_connectors() {
        let result = FluentLayoutBuilder::new()
            .with(A, LayoutSpec::new([ConnectorType::Width]))
            .try_build();
        match result {
            Err(LayoutError::Unresolved(found)) => assert_eq!(
                found,
                vec![Diagnostic::MissingDimension {
                    item: A,
                    attribute: Attribute::Width
                }]
            ),
            other => panic!("expected unresolved width, got {other:?}"),
        }

        let result = FluentLayoutBuilder::new()
            .with(A, edges())
            .with(B, LayoutSpec::new([ConnectorType::Center]))
            .try_build();
        assert!(matches!(
            result,
            Err(LayoutError::Unresolved(ref found))
                if found == &[Diagnostic::MissingCenter { item: B }]
        ));
    }

    #[test]
    fn try_apply_refuses_unresolved_pass() {
        let mut scene = Scene::new();
        let root = scene.add_root("root");
        let child = scene.add_child(root, "child").unwrap();

        let result = FluentLayoutBuilder::new()
            .with(child, LayoutSpec::new([ConnectorType::Top, ConnectorType::Height]))
            .try_apply(root, &mut scene);
        assert!(matches!(result, Err(LayoutError::Unresolved(ref found)) if found.len() == 1));
        assert_eq!(scene.active_count(), 0);

        let summary = FluentLayoutBuilder::new()
            .with(child, LayoutSpec::new([ConnectorType::Top]))
            .try_apply(root, &mut scene)
            .unwrap();
        assert_eq!(summary.activated, 1);
    }

    #[test]
    fn apply_activates_one_batch() {
        let mut scene = Scene::new();
        let root = scene.add_root("root");
        let header = scene.add_child(root, "header").unwrap();
        let body = scene.add_child(root, "body").unwrap();

        let mut config = BuilderConfig::default();
        config.enable_metrics();
        let metrics = config.metrics_handle().unwrap();
        let sink = MemorySink::new();
        let config = config.with_logger(Logger::new(sink.clone()));

        let summary = FluentLayoutBuilder::with_config(config)
            .with(
                header,
                LayoutSpec::new([
                    ConnectorType::Top,
                    ConnectorType::Leading,
                    ConnectorType::Trailing,
                ])
                .with_size(SizeSpec::Height(44.0)),
            )
            .with(
                body,
                LayoutSpec::new([
                    ConnectorType::Leading,
                    ConnectorType::Bottom,
                    ConnectorType::Width,
                ]),
            )
            .link_v(None, None, 0.0)
            .apply(root, &mut scene)
            .unwrap();

        assert_eq!(summary.activated, 7);
        // top, leading, trailing, height, plus header.bottom from the link
        assert_eq!(scene.constraints_for(header).len(), 5);
        assert_eq!(
            scene
                .constraints_for(body)
                .iter()
                .map(|d| d.first.attribute)
                .collect::<Vec<_>>(),
            vec![Attribute::Leading, Attribute::Bottom]
        );

        let snapshot = metrics.lock().unwrap().snapshot();
        assert_eq!(snapshot.specs_compiled, 2);
        assert_eq!(snapshot.descriptors_emitted, 7);
        assert_eq!(snapshot.requests_skipped, 1);
        assert_eq!(snapshot.batches_applied, 1);

        let messages = sink.messages();
        assert!(messages.contains(&"request_skipped".to_string()));
        assert!(messages.contains(&"batch_applied".to_string()));
        let events = sink.events();
        let last = events.last().unwrap();
        assert_eq!(last.message, "layout_metrics");
        assert_eq!(last.target, METRICS_TARGET);
        assert_eq!(last.fields["batches_applied"], 1);
    }

    #[test]
    fn apply_propagates_host_errors() {
        let mut scene = Scene::new();
        let root = scene.add_root("root");
        let result = FluentLayoutBuilder::new()
            .with(ItemId::new(77), LayoutSpec::fill(Insets::ZERO))
            .apply(root, &mut scene);
        assert!(matches!(result, Err(LayoutError::ItemNotFound(_))));
        assert_eq!(scene.active_count(), 0);
    }

    #[test]
    fn entry_json_lists_connector_labels() {
        let entries = FluentLayoutBuilder::new().with(A, edges()).build();
        let value = entries[0].to_json();
        assert_eq!(value["item"], 1);
        assert_eq!(value["connectors"], json!(["leading", "trailing"]));
    }
}
