//! Disorder Catalog - The fixed, ordered set of records shown on screen

use std::sync::OnceLock;

use super::disorder::{DisorderRecord, IconToken, ThemeColor};

/// Catalog storage, built on first access
static CATALOG: OnceLock<Vec<DisorderRecord>> = OnceLock::new();

/// Build the canonical records. Insertion order is display order.
fn init_catalog() -> Vec<DisorderRecord> {
    vec![
        DisorderRecord::new(
            "Alzheimer's Disease",
            "Progressive cognitive decline and memory loss that gradually interferes with daily life.",
            "Neurons and their synapses are lost as amyloid plaques build up between cells and tau tangles form inside them.",
            IconToken::BrainProfile,
            ThemeColor::Blue,
        ),
        DisorderRecord::new(
            "Parkinson's Disease",
            "Marked by tremor, muscle rigidity, and difficulty with movement and balance.",
            "Loss of dopamine-producing neurons in the substantia nigra disrupts the circuits that coordinate smooth movement.",
            IconToken::FigureWalk,
            ThemeColor::Purple,
        ),
        DisorderRecord::new(
            "Multiple Sclerosis",
            "Fatigue, muscle weakness, and vision problems that can flare up and subside.",
            "The immune system attacks the myelin sheath around nerve fibers, slowing or blocking signal conduction.",
            IconToken::CloudBolt,
            ThemeColor::Orange,
        ),
        DisorderRecord::new(
            "Myasthenia Gravis",
            "Muscle weakness and fatigue that fluctuate, worsening with activity and easing with rest.",
            "Antibodies block acetylcholine receptors at the neuromuscular junction, so nerve signals fail to trigger muscle contraction.",
            IconToken::PersonQuestion,
            ThemeColor::Teal,
        ),
        DisorderRecord::new(
            "Charcot-Marie-Tooth",
            "Muscle wasting and loss of sensation in the feet, legs, hands, and arms.",
            "Inherited mutations affect proteins in the axons or myelin of peripheral nerves, degrading the signals they carry.",
            IconToken::HandDraw,
            ThemeColor::Green,
        ),
    ]
}

/// All records, in display order
pub fn catalog() -> &'static [DisorderRecord] {
    CATALOG.get_or_init(init_catalog)
}
