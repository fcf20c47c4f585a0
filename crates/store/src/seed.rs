//! Fixed sample catalog the service starts with.

use chrono::{TimeZone, Utc};

use gallery_core::layout::{Complexity, Layout, PerformanceScores};
use gallery_core::types::{DbId, Timestamp};

fn day(year: i32, month: u32, date: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn layout(
    id: DbId,
    name: &str,
    category: &str,
    description: &str,
    complexity: Complexity,
    use_cases: [&str; 3],
    features: [&str; 4],
    performance: (u8, u8, u8),
    last_updated: Timestamp,
    icon: &str,
    download_count: i64,
) -> Layout {
    Layout {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        complexity,
        use_cases: use_cases.iter().map(|s| s.to_string()).collect(),
        features: features.iter().map(|s| s.to_string()).collect(),
        performance: PerformanceScores {
            speed: performance.0,
            accessibility: performance.1,
            responsive: performance.2,
        },
        last_updated,
        icon: icon.to_string(),
        download_count,
        is_active: true,
    }
}

/// The 8 sample layouts, ids 1 through 8 in catalog order.
pub fn sample_layouts() -> Vec<Layout> {
    vec![
        layout(
            1,
            "Neural Network",
            "AI & Machine Learning",
            "Interconnected nodes representing AI neural pathways with dynamic data flow visualization.",
            Complexity::Advanced,
            ["AI Dashboards", "Data Science Platforms", "Machine Learning Tools"],
            ["Dynamic Connections", "Real-time Data Flow", "Interactive Nodes", "Scalable Architecture"],
            (92, 96, 98),
            day(2025, 1, 15),
            "Brain",
            1247,
        ),
        layout(
            2,
            "Quantum Grid",
            "Scientific Computing",
            "Quantum computing visualization with probability states and superposition effects.",
            Complexity::Expert,
            ["Quantum Computing", "Scientific Research", "Advanced Analytics"],
            ["Quantum States", "Probability Visualization", "Superposition Effects", "Research-Grade UI"],
            (89, 94, 96),
            day(2025, 1, 12),
            "Atom",
            892,
        ),
        layout(
            3,
            "Bio Helix",
            "Life Sciences",
            "DNA-inspired double helix structure for biological data and research applications.",
            Complexity::Medium,
            ["Biotechnology", "Medical Research", "Genetic Analysis"],
            ["Helix Structure", "Genetic Patterns", "Biological Data", "Research Tools"],
            (94, 97, 99),
            day(2025, 1, 10),
            "Dna",
            1456,
        ),
        layout(
            4,
            "Cosmic Web",
            "Astrophysics",
            "Large-scale universe structure visualization for astronomical and space research.",
            Complexity::Advanced,
            ["Space Research", "Astronomy", "Data Visualization"],
            ["Cosmic Scale", "Astronomical Data", "Space Visualization", "Research Interface"],
            (88, 93, 95),
            day(2025, 1, 8),
            "Telescope",
            1023,
        ),
        layout(
            5,
            "Fluid Dynamics",
            "Engineering",
            "Real-time fluid simulation interface for engineering and scientific modeling.",
            Complexity::Advanced,
            ["Engineering Software", "Simulation Tools", "Scientific Modeling"],
            ["Fluid Simulation", "Real-time Physics", "Engineering Tools", "Technical Interface"],
            (85, 95, 97),
            day(2025, 1, 5),
            "Waves",
            834,
        ),
        layout(
            6,
            "Fractal Geometry",
            "Mathematics",
            "Self-similar recursive patterns for mathematical and analytical applications.",
            Complexity::Expert,
            ["Mathematical Modeling", "Pattern Analysis", "Research Tools"],
            ["Fractal Patterns", "Mathematical Precision", "Infinite Zoom", "Pattern Recognition"],
            (87, 92, 94),
            day(2025, 1, 3),
            "Infinity",
            678,
        ),
        layout(
            7,
            "Crystal Lattice",
            "Materials Science",
            "Atomic structure visualization for chemistry and materials research.",
            Complexity::Medium,
            ["Chemistry Research", "Materials Science", "Molecular Modeling"],
            ["Atomic Structure", "Molecular Bonds", "Crystal Patterns", "Scientific Accuracy"],
            (93, 96, 98),
            day(2025, 1, 1),
            "Microscope",
            1189,
        ),
        layout(
            8,
            "Holographic Matrix",
            "Spatial Computing",
            "Multi-dimensional interface design for AR/VR and spatial computing platforms.",
            Complexity::Expert,
            ["AR/VR Applications", "Spatial Computing", "3D Interfaces"],
            ["3D Layers", "Spatial Navigation", "Immersive Design", "Future Interface"],
            (86, 89, 91),
            day(2024, 12, 28),
            "Layers3",
            756,
        ),
    ]
}
