use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use anchor_layout::logging::{LogEvent, LogSink};
use anchor_layout::{
    BuilderConfig, CenterDirective, ConnectorType, FluentLayoutBuilder, Insets, ItemId,
    LayoutSpec, Logger, LoggingResult, Scene, SizeSpec, compile,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn rich_spec() -> LayoutSpec {
    LayoutSpec::new([
        ConnectorType::All,
        ConnectorType::Width,
        ConnectorType::Height,
        ConnectorType::Center,
    ])
    .with_insets(Insets::symmetric(8.0, 16.0))
    .with_size(SizeSpec::Size {
        width: 320.0,
        height: 44.0,
    })
    .with_center([CenterDirective::OffsetX(0.0), CenterDirective::OffsetY(4.0)])
}

fn compile_single_spec(c: &mut Criterion) {
    let spec = rich_spec();
    let content = ItemId::new(1);
    let container = ItemId::new(2);
    c.bench_function("compile_single_spec", |b| {
        b.iter(|| compile(black_box(content), black_box(container), black_box(&spec)));
    });
}

fn apply_stacked_rows(c: &mut Criterion) {
    c.bench_function("apply_stacked_rows", |b| {
        b.iter(|| {
            let mut scene = Scene::new();
            let root = scene.add_root("root");
            let rows: Vec<ItemId> = (0..64)
                .map(|idx| scene.add_child(root, format!("row{idx}")).expect("row"))
                .collect();

            let config = BuilderConfig::default().with_logger(Logger::new(NullSink));
            let mut builder = FluentLayoutBuilder::with_config(config).start_stack();
            for row in &rows {
                builder = builder.with(
                    *row,
                    LayoutSpec::new([ConnectorType::Leading, ConnectorType::Trailing])
                        .with_size(SizeSpec::Height(44.0)),
                );
            }
            builder
                .stack_v(black_box(8.0))
                .apply(root, &mut scene)
                .expect("apply")
        });
    });
}

criterion_group!(benches, compile_single_spec, apply_stacked_rows);
criterion_main!(benches);
