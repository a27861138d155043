use std::collections::BTreeMap;

use anchor_layout::{Container, Element, PositionSpec, Scene, Size, SizeConstraint};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut attrs = BTreeMap::new();
    attrs.insert("layout_position".to_string(), "bottom_right".to_string());
    attrs.insert("layout_margin".to_string(), "12".to_string());
    let spec = PositionSpec::from_attributes(&attrs)?;

    let mut root = Container::new();
    let fab = root.attach(Element::new("fab", Size::new(56, 56)).with_spec(spec))?;
    root.layout(SizeConstraint::exact(360), SizeConstraint::exact(640))?;
    println!("fab: {:?}", root.frame(fab));

    let scene = Scene::from_path("tests/data/dashboard.json")?;
    let report = scene.solve()?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
