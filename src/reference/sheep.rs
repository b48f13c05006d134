// ==========================================
// 家畜体重估算系统 - 绵羊 (Domba) 参考数据
// ==========================================

use super::{breed, slaughter, SpeciesTables};
use crate::domain::{FormulaDefinition, FormulaKind, Species};

pub(crate) fn tables() -> SpeciesTables {
    SpeciesTables {
        species: Species::Sheep,
        formulas: formulas(),
        breeds: vec![
            breed("Domba Ekor Tipis", "Lambourne", 0.95, (1.12, 0.9), (55.0, 85.0), (45.0, 75.0), [(12.0, 42.0), (6.0, 12.0), (1.0, 6.0)]),
            breed("Domba Ekor Gemuk", "Lambourne", 1.1, (1.15, 0.88), (65.0, 95.0), (55.0, 85.0), [(12.0, 48.0), (6.0, 12.0), (1.0, 6.0)]),
            breed("Domba Merino", "NSA Australia", 1.05, (1.2, 0.85), (75.0, 110.0), (65.0, 95.0), [(15.0, 54.0), (8.0, 15.0), (1.0, 8.0)]),
            breed("Domba Garut", "Lambourne", 1.0, (1.25, 0.85), (70.0, 105.0), (60.0, 90.0), [(12.0, 48.0), (6.0, 12.0), (1.0, 6.0)]),
            breed("Domba Suffolk", "Valdez", 1.15, (1.15, 0.9), (85.0, 130.0), (75.0, 115.0), [(15.0, 54.0), (8.0, 15.0), (1.0, 8.0)]),
            breed("Domba Texel", "Valdez", 1.2, (1.18, 0.9), (90.0, 135.0), (80.0, 120.0), [(15.0, 54.0), (8.0, 15.0), (1.0, 8.0)]),
        ],
        slaughter: vec![
            slaughter("Domba Ekor Tipis", (48.0, 45.0), [7.5, 9.0, 2.8, 0.5, 3.5, 0.5, 1.5, 1.2, 0.3, 18.0, 4.0], 70.0,
                "Sumantri, C., et al. (2007). Keragaan dan Hubungan Phylogenik Antar Domba Lokal Indonesia. J. Ilmu Ternak dan Veteriner, 12(1), 42-48."),
            slaughter("Domba Ekor Gemuk", (49.0, 46.0), [7.2, 8.8, 2.7, 2.5, 3.5, 0.5, 1.5, 1.2, 0.3, 17.0, 5.0], 68.0,
                "Sumantri, C., et al. (2007). Keragaan dan Hubungan Phylogenik Antar Domba Lokal Indonesia. J. Ilmu Ternak dan Veteriner, 12(1), 42-48."),
            slaughter("Domba Merino", (52.0, 49.0), [6.8, 10.5, 2.5, 0.5, 3.3, 0.5, 1.4, 1.1, 0.3, 16.0, 4.5], 72.0,
                "Brand, T.S., et al. (2009). Merino and Dohne Merino Lambs Reared under Feedlot Conditions. S. African J. Animal Science, 39(1), 50-59."),
            slaughter("Domba Garut", (50.0, 47.0), [7.2, 9.0, 2.7, 0.7, 3.4, 0.5, 1.5, 1.1, 0.3, 17.5, 4.2], 71.0,
                "Heriyadi, D. (2005). Karakteristik Morfologis dan Performans Domba Garut. Prosiding Seminar Nasional Teknologi Peternakan dan Veteriner, pp.425-430."),
            slaughter("Domba Suffolk", (53.0, 50.0), [6.5, 8.5, 2.4, 0.5, 3.3, 0.5, 1.4, 1.0, 0.3, 15.5, 5.0], 74.0,
                "Snowder, G.D., et al. (1994). Carcass characteristics and optimal slaughter weights in four breeds of sheep. J. Animal Science, 72(4), 932-937."),
            slaughter("Domba Texel", (54.0, 51.0), [6.2, 8.3, 2.3, 0.5, 3.2, 0.5, 1.3, 1.0, 0.3, 15.0, 4.8], 76.0,
                "Johnson, P.L., et al. (2005). Muscle traits and meat quality in Texel sired lambs. Proceedings of the New Zealand Society of Animal Production, 65, 239-243."),
        ],
    }
}

fn formulas() -> Vec<FormulaDefinition> {
    vec![
        FormulaDefinition::new(
            "Lambourne",
            "(LD)² × PB / 15000",
            "Rumus Lambourne khusus untuk domba",
            "Lambourne, L.J. (1930). Weight Estimation in Sheep through Body Measurements. Australian Journal of Agricultural Research, 5(2), 93-101.",
            FormulaKind::GirthSquaredLengthOver { divisor: 15000.0 },
        ),
        FormulaDefinition::new(
            "NSA Australia",
            "(0.0000627 × LD × PB) - 3.91",
            "Rumus NSA Australia untuk domba tipe medium",
            "National Sheep Association of Australia. (1985). Standard Methods for Sheep Weight Prediction. Australian Veterinary Journal, 62(11), 382-385.",
            FormulaKind::GirthLengthAffine {
                coefficient: 0.0000627,
                intercept: -3.91,
            },
        ),
        FormulaDefinition::new(
            "Valdez",
            "0.0003 × (LD)² × PB",
            "Rumus Valdez untuk berbagai tipe domba",
            "Valdez, C.A. (1997). Live Weight Estimation in Meat-Type Sheep. Small Ruminant Research, 25(3), 273-277.",
            FormulaKind::GirthSquaredLengthTimes {
                coefficient: 0.0003,
            },
        ),
    ]
}
