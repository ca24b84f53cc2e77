/// Command-line arguments
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which of the tutorial scenes to show
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    /// Flat colored quad drawn straight in clip space
    Triangle,
    /// Colored triangle tumbling on all three axes
    SpinningTriangle,
    /// Cube spinning around Y
    RotatingCube,
    /// Cube rotated with the left button and moved with the right button
    MouseCube,
}

impl DemoKind {
    pub const ALL: [DemoKind; 4] = [
        DemoKind::Triangle,
        DemoKind::SpinningTriangle,
        DemoKind::RotatingCube,
        DemoKind::MouseCube,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::Triangle => "2D triangle",
            DemoKind::SpinningTriangle => "3D triangle",
            DemoKind::RotatingCube => "rotating cube",
            DemoKind::MouseCube => "mouse cube",
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "gltut-terminal")]
#[command(about = "Tutorial 3D demos rendered as colored ASCII", long_about = None)]
pub struct Cli {
    /// Scene to start with (switch at runtime with 1-4)
    #[arg(long, value_enum, default_value = "mouse-cube")]
    pub demo: DemoKind,

    /// JSON file with demo settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Drag sensitivity for both mouse buttons
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Per-frame momentum decay after a drag is released
    #[arg(long)]
    pub amortization: Option<f32>,
}
