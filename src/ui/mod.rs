mod renderer;

pub use renderer::ui;
