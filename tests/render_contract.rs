//! Guarantees every engine gives the viewport: balanced name stacks,
//! selection dominance, size monotonicity and per-endpoint bond halves.

use glam::Vec3;
use molstyle::color::Color;
use molstyle::element;
use molstyle::engine::{
    BallAndStickEngine, Engine, EngineSet, PrimitiveStyle, SpaceFillEngine,
    WireframeEngine,
};
use molstyle::error::RenderError;
use molstyle::molecule::{AtomId, BondId, BondOrder, Molecule};
use molstyle::render::{Frame, Geometry, PickTarget};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn builtin_engines() -> Vec<Box<dyn Engine>> {
    vec![
        Box::new(WireframeEngine::new()),
        Box::new(BallAndStickEngine::new()),
        Box::new(SpaceFillEngine::new()),
    ]
}

fn carbonyl() -> Molecule {
    let mut mol = Molecule::new();
    let c = mol.add_atom(6, Vec3::ZERO);
    let o = mol.add_atom(8, Vec3::new(1.2, 0.0, 0.0));
    let _ = mol.add_bond(c, o, BondOrder::Double).unwrap();
    mol
}

#[test]
fn name_stack_is_balanced_after_every_call() {
    init_logger();
    let mol = carbonyl();
    for engine in builtin_engines() {
        let mut frame = Frame::new();
        frame.push_name(42);
        let before = frame.state();

        engine.render_atom(&mut frame, &mol, AtomId(0)).unwrap();
        engine.render_bond(&mut frame, &mol, BondId(0)).unwrap();
        assert_eq!(
            engine.render_atom(&mut frame, &mol, AtomId(9)),
            Err(RenderError::InvalidAtom(AtomId(9)))
        );
        assert_eq!(
            engine.render_bond(&mut frame, &mol, BondId(3)),
            Err(RenderError::InvalidBond(BondId(3)))
        );

        assert_eq!(frame.names().as_slice(), &[42], "{}", engine.name());
        assert_eq!(frame.state(), before, "{}", engine.name());
        assert_eq!(frame.pop_name(), Ok(42));
    }
}

#[test]
fn dangling_bond_endpoint_is_reported() {
    init_logger();
    let mut mol = carbonyl();
    let _ = mol.remove_atom(AtomId(1)).unwrap();
    // the bond went with the atom
    let mut frame = Frame::new();
    let engine = WireframeEngine::new();
    assert!(engine.render_bond(&mut frame, &mol, BondId(0)).is_err());
    assert!(frame.commands().is_empty());
    assert!(frame.names().is_empty());
}

#[test]
fn selection_overrides_element_color() {
    init_logger();
    let mut mol = carbonyl();
    mol.set_selected(AtomId(1), true).unwrap();
    for engine in builtin_engines() {
        let highlight = engine.style().highlight_color();
        let mut frame = Frame::new();
        engine.render_atom(&mut frame, &mol, AtomId(0)).unwrap();
        engine.render_atom(&mut frame, &mol, AtomId(1)).unwrap();

        let colors: Vec<Color> =
            frame.commands().iter().map(|c| c.color).collect();
        assert_eq!(colors[0], Color::from_atomic_number(6));
        assert_eq!(colors[1], highlight);
        assert_ne!(colors[1], Color::from_atomic_number(8));
    }
}

#[test]
fn selected_atoms_are_drawn_larger_for_every_element() {
    let styles = [
        PrimitiveStyle::wireframe(),
        PrimitiveStyle::ball_and_stick(),
        PrimitiveStyle::space_fill(),
    ];
    let numbers = (0..=element::MAX_ATOMIC_NUMBER).chain([200, u8::MAX]);
    for z in numbers {
        let mut mol = Molecule::new();
        let plain = mol.add_atom(z, Vec3::ZERO);
        let picked = mol.add_atom(z, Vec3::X);
        mol.set_selected(picked, true).unwrap();
        let plain = mol.atom(plain).unwrap();
        let picked = mol.atom(picked).unwrap();

        for style in styles {
            let small = style.atom_appearance(plain).size;
            let large = style.atom_appearance(picked).size;
            assert!(small > 0.0, "z={z}");
            assert!(large > small, "z={z}: {large} <= {small}");
        }
    }
}

#[test]
fn bond_halves_follow_their_own_endpoint() {
    init_logger();
    let mut mol = carbonyl();
    mol.set_selected(AtomId(0), true).unwrap();
    let style = PrimitiveStyle::wireframe();

    let mut frame = Frame::new();
    WireframeEngine::new()
        .render_bond(&mut frame, &mol, BondId(0))
        .unwrap();
    let halves = frame.commands();
    assert_eq!(halves.len(), 2);

    assert_eq!(halves[0].color, style.highlight_color());
    assert_eq!(halves[1].color, Color::from_atomic_number(8));
    let widths: Vec<f32> = halves
        .iter()
        .map(|c| match c.geometry {
            Geometry::Segment { width, .. } => width,
            _ => 0.0,
        })
        .collect();
    assert_eq!(widths, [style.selected_bond_width, style.bond_width]);
    assert_eq!(
        PickTarget::from_names(&halves[0].names),
        PickTarget::Atom(AtomId(0))
    );
    assert_eq!(
        PickTarget::from_names(&halves[1].names),
        PickTarget::Atom(AtomId(1))
    );
}

#[test]
fn double_bond_sticks_are_offset_and_named_as_bond() {
    init_logger();
    let mol = carbonyl();
    let mut frame = Frame::new();
    BallAndStickEngine::new()
        .render_bond(&mut frame, &mol, BondId(0))
        .unwrap();

    // two strokes per half
    assert_eq!(frame.commands().len(), 4);
    for cmd in frame.commands() {
        assert_eq!(
            PickTarget::from_names(&cmd.names),
            PickTarget::Bond(BondId(0))
        );
    }
}

#[test]
fn engine_set_lists_builtins_in_order() {
    let set = EngineSet::builtin();
    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, ["wireframe", "ball_and_stick", "space_fill"]);
    assert_eq!(set.enabled().count(), 3);
}
