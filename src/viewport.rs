//! Per-frame driver: runs the enabled engines over a molecule and answers
//! pick queries against the recorded frame.

use crate::camera::Camera;
use crate::engine::{Engine, EngineSet, RenderReport};
use crate::error::StyleError;
use crate::molecule::Molecule;
use crate::options::Options;
use crate::render::{
    nearest, pick_commands, Frame, HitRecord, PickRegion, PickTarget,
};

/// Summary of one [`Viewport::render_frame`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Names of the engines that were called, in call order.
    pub engines: Vec<String>,
    /// Per-primitive outcome across all engines.
    pub render: RenderReport,
}

/// Engines, camera and window size of one 3D view.
#[derive(Debug)]
pub struct Viewport {
    engines: EngineSet,
    camera: Camera,
    width: u32,
    height: u32,
    pick_tolerance: f32,
}

impl Viewport {
    /// Viewport of the given size with the default camera and pick
    /// tolerance.
    #[must_use]
    pub fn new(engines: EngineSet, width: u32, height: u32) -> Self {
        let mut camera = Camera::default();
        camera.resize(width, height);
        Self {
            engines,
            camera,
            width,
            height,
            pick_tolerance: Options::default().picking.tolerance_px,
        }
    }

    /// Like [`Viewport::new`], with styles and pick tolerance taken from
    /// `options`.
    pub fn with_options(
        mut engines: EngineSet,
        width: u32,
        height: u32,
        options: &Options,
    ) -> Result<Self, StyleError> {
        options.validate()?;
        options.apply_styles(&mut engines)?;
        let mut viewport = Self::new(engines, width, height);
        viewport.pick_tolerance = options.picking.tolerance_px;
        Ok(viewport)
    }

    /// Registered engines.
    #[must_use]
    pub fn engines(&self) -> &EngineSet {
        &self.engines
    }

    /// Registered engines, mutably (to toggle or restyle them).
    pub fn engines_mut(&mut self) -> &mut EngineSet {
        &mut self.engines
    }

    /// Add an engine; it renders from the next frame on if enabled.
    pub fn register_engine(
        &mut self,
        engine: Box<dyn Engine>,
    ) -> Result<(), StyleError> {
        self.engines.register(engine)
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Camera, mutably.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Window size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Half size of the square region a click picks, in pixels.
    #[must_use]
    pub fn pick_tolerance(&self) -> f32 {
        self.pick_tolerance
    }

    /// Track a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.camera.resize(width, height);
    }

    /// Point the camera at the molecule so all of it is in view. Returns
    /// `false` (and leaves the camera alone) for an empty molecule.
    pub fn frame_molecule(&mut self, molecule: &Molecule) -> bool {
        let Some((min, max)) = molecule.bounds() else {
            return false;
        };
        self.camera.frame_bounds(min, max);
        true
    }

    /// Render one frame from scratch.
    #[must_use]
    pub fn render_frame(&self, molecule: &Molecule) -> (Frame, FrameReport) {
        let mut frame = Frame::new();
        let report = self.render_into(&mut frame, molecule);
        (frame, report)
    }

    /// Append one pass over `molecule` to `frame`.
    ///
    /// Every enabled engine is called once per atom, then once per bond.
    /// Disabled engines are not called at all. A failing primitive is
    /// skipped and recorded; the pass continues.
    pub fn render_into(
        &self,
        frame: &mut Frame,
        molecule: &Molecule,
    ) -> FrameReport {
        let mut report = FrameReport::default();
        for engine in self.engines.enabled() {
            report.engines.push(engine.name().to_owned());
            for atom in molecule.atoms() {
                let mut scope = frame.scope();
                let result =
                    engine.render_atom(&mut scope, molecule, atom.id());
                report.render.record(result);
            }
            for bond in molecule.bonds() {
                let mut scope = frame.scope();
                let result =
                    engine.render_bond(&mut scope, molecule, bond.id());
                report.render.record(result);
            }
        }
        log::debug!(
            "frame: {} engines, {} primitives drawn, {} skipped, {} commands",
            report.engines.len(),
            report.render.rendered,
            report.render.failed(),
            frame.commands().len()
        );
        report
    }

    /// Hit records of everything in `frame` that overlaps `region`, in draw
    /// order.
    #[must_use]
    pub fn pick(&self, frame: &Frame, region: &PickRegion) -> Vec<HitRecord> {
        let projector = self.camera.projector(self.width, self.height);
        pick_commands(frame.commands(), &projector, region)
    }

    /// Hit records under the pixel `(x, y)`, widened by the pick tolerance.
    #[must_use]
    pub fn pick_at(&self, frame: &Frame, x: f32, y: f32) -> Vec<HitRecord> {
        self.pick(frame, &PickRegion::around(x, y, self.pick_tolerance))
    }

    /// The frontmost primitive under the pixel `(x, y)`.
    #[must_use]
    pub fn pick_nearest(&self, frame: &Frame, x: f32, y: f32) -> PickTarget {
        nearest(&self.pick_at(frame, x, y))
    }
}
