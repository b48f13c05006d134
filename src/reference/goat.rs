// ==========================================
// 家畜体重估算系统 - 山羊 (Kambing) 参考数据
// ==========================================

use super::{breed, slaughter, SpeciesTables};
use crate::domain::{FormulaDefinition, FormulaKind, Species};

pub(crate) fn tables() -> SpeciesTables {
    SpeciesTables {
        species: Species::Goat,
        formulas: formulas(),
        breeds: vec![
            breed("Kambing Kacang", "Arjodarmoko", 0.9, (1.15, 0.9), (50.0, 80.0), (40.0, 70.0), [(12.0, 48.0), (6.0, 12.0), (1.0, 6.0)]),
            breed("Kambing Ettawa", "New Zealand", 1.05, (1.2, 0.88), (70.0, 110.0), (60.0, 95.0), [(15.0, 60.0), (8.0, 15.0), (1.0, 8.0)]),
            breed("Kambing Peranakan Ettawa (PE)", "Arjodarmoko", 1.0, (1.18, 0.9), (65.0, 100.0), (55.0, 90.0), [(12.0, 54.0), (7.0, 12.0), (1.0, 7.0)]),
            breed("Kambing Boer", "New Zealand", 1.1, (1.15, 0.9), (75.0, 120.0), (65.0, 105.0), [(15.0, 60.0), (8.0, 15.0), (1.0, 8.0)]),
            breed("Kambing Jawarandu", "Arjodarmoko", 0.95, (1.12, 0.92), (60.0, 95.0), (50.0, 85.0), [(12.0, 48.0), (6.0, 12.0), (1.0, 6.0)]),
            breed("Kambing Bligon", "Khan", 0.92, (1.1, 0.92), (55.0, 90.0), (45.0, 80.0), [(12.0, 48.0), (6.0, 12.0), (1.0, 6.0)]),
        ],
        slaughter: vec![
            slaughter("Kambing Kacang", (48.0, 45.0), [8.0, 8.5, 3.0, 0.3, 3.5, 0.5, 1.5, 1.2, 0.3, 18.0, 4.0], 70.0,
                "Sunarlim, R., et al. (1999). Karakteristik Karkas Kambing Kacang dengan Kambing PE. Buletin Peternakan, 23(1), 1-6."),
            slaughter("Kambing Ettawa", (50.0, 47.0), [7.5, 8.0, 2.8, 0.3, 3.3, 0.5, 1.4, 1.1, 0.3, 17.0, 3.8], 72.0,
                "Dhanda, J.S., et al. (2003). Carcass characteristics of Boer × Angora and Boer × Feral goats. Small Ruminant Research, 48(2), 163-169."),
            slaughter("Kambing Peranakan Ettawa (PE)", (49.0, 46.0), [7.8, 8.2, 2.9, 0.3, 3.4, 0.5, 1.5, 1.1, 0.3, 17.5, 3.9], 71.0,
                "Sunarlim, R., et al. (1999). Karakteristik Karkas Kambing Kacang dengan Kambing PE. Buletin Peternakan, 23(1), 1-6."),
            slaughter("Kambing Boer", (52.0, 49.0), [7.0, 7.8, 2.5, 0.3, 3.2, 0.5, 1.4, 1.0, 0.3, 16.0, 4.0], 75.0,
                "Van Niekerk, W.A. and N.H. Casey. (1988). The Boer Goat II. Growth, nutrient requirements, carcass and meat quality. Small Ruminant Research, 1(4), 355-368."),
            slaughter("Kambing Jawarandu", (47.5, 45.0), [7.9, 8.4, 3.0, 0.3, 3.4, 0.5, 1.5, 1.2, 0.3, 18.0, 4.2], 69.0,
                "Astuti, D.A. (2005). Performa Produksi dan Reproduksi Kambing Jawarandu. J. Pengembangan Peternakan Tropis, 30(2), 89-95."),
            slaughter("Kambing Bligon", (47.0, 44.5), [8.0, 8.5, 3.0, 0.3, 3.5, 0.5, 1.5, 1.2, 0.3, 18.2, 4.2], 68.0,
                "Budisatria, I.G.S. (2006). Karakteristik Kambing Bligon dan Produktivitasnya. Buletin Peternakan, 30(4), 178-187."),
        ],
    }
}

fn formulas() -> Vec<FormulaDefinition> {
    vec![
        FormulaDefinition::new(
            "Arjodarmoko",
            "(LD)² × PB / 18000",
            "Rumus Arjodarmoko khusus untuk kambing lokal Indonesia",
            "Arjodarmoko, S. (1975). Metode Penaksiran Berat Badan Kambing Indonesia. Buletin Peternakan, 2(3), 45-51.",
            FormulaKind::GirthSquaredLengthOver { divisor: 18000.0 },
        ),
        FormulaDefinition::new(
            "New Zealand",
            "0.0000968 × (LD)² × PB",
            "Rumus New Zealand untuk kambing tipe besar",
            "New Zealand Goat Farmers Association. (1989). Weight Estimation in Dairy and Meat Goats. New Zealand Journal of Agricultural Research, 32(4), 291-298.",
            FormulaKind::GirthSquaredLengthTimes {
                coefficient: 0.0000968,
            },
        ),
        FormulaDefinition::new(
            "Khan",
            "0.0004 × (LD)² × 0.6 × PB",
            "Rumus Khan untuk kambing berbagai ukuran",
            "Khan, B.B. (1992). Estimation of Live Weight from Body Measurements in Goats. Journal of Small Ruminant Research, 8(2), 175-183.",
            // 0.0004 × 0.6
            FormulaKind::GirthSquaredLengthTimes {
                coefficient: 0.00024,
            },
        ),
    ]
}
