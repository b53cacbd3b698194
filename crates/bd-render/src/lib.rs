pub mod driver;
pub mod frame;
pub mod lifecycle;
pub mod painter;
pub mod renderer;
pub mod scene;

pub use driver::{CancelToken, FrameScheduler, run_loop};
pub use frame::paint_frame;
pub use lifecycle::{InitOutcome, ReadyNotifier, ReadyWaiter, SectionReady, ready_signal, supervise_init};
pub use painter::Painter;
pub use renderer::{BackdropRenderer, Phase};
pub use scene::ScenePainter;
