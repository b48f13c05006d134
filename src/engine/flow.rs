// ==========================================
// 家畜体重估算系统 - 胴体流向图数据
// ==========================================
// 节点: 活重, 胴体, 非胴体, 净肉, 骨脂, 各非胴体组分
// 连线:
//   活重 → 胴体           (carcass_weight)
//   活重 → 非胴体         (live - carcass)
//   胴体 → 净肉 / 骨脂
//   非胴体 → 各组分
// ==========================================

use crate::domain::{CarcassBreakdown, CarcassFlow, FlowLink, FlowNode};
use crate::i18n;

pub const NODE_LIVE_WEIGHT: &str = "live_weight";
pub const NODE_CARCASS: &str = "carcass";
pub const NODE_NON_CARCASS: &str = "non_carcass";
pub const NODE_MEAT: &str = "meat";
pub const NODE_BONE_AND_FAT: &str = "bone_and_fat";

const FIXED_NODES: [&str; 5] = [
    NODE_LIVE_WEIGHT,
    NODE_CARCASS,
    NODE_NON_CARCASS,
    NODE_MEAT,
    NODE_BONE_AND_FAT,
];

/// 由胴体分解构建流向图, 标签按 locale 本地化
pub fn build_carcass_flow(breakdown: &CarcassBreakdown, locale: &str) -> CarcassFlow {
    let mut nodes: Vec<FlowNode> = FIXED_NODES
        .iter()
        .map(|id| FlowNode {
            id: (*id).to_string(),
            label: i18n::flow_label(id, locale),
        })
        .collect();

    // 下标与 FIXED_NODES 顺序一致
    let (live, carcass, non_carcass, meat, bone_fat) = (0, 1, 2, 3, 4);
    let mut links = vec![
        FlowLink {
            source: live,
            target: carcass,
            value: breakdown.carcass_weight,
        },
        FlowLink {
            source: live,
            target: non_carcass,
            value: breakdown.non_carcass_weight(),
        },
        FlowLink {
            source: carcass,
            target: meat,
            value: breakdown.meat_weight,
        },
        FlowLink {
            source: carcass,
            target: bone_fat,
            value: breakdown.bone_and_fat_weight,
        },
    ];

    for component in &breakdown.non_carcass_weights {
        links.push(FlowLink {
            source: non_carcass,
            target: nodes.len(),
            value: component.weight_kg,
        });
        nodes.push(FlowNode {
            id: component.component.label_key().to_string(),
            label: i18n::component_label(component.component, locale),
        });
    }

    CarcassFlow { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Sex, Species};
    use crate::engine::CarcassEngine;
    use crate::reference::ReferenceData;
    use approx::assert_relative_eq;

    fn bali_breakdown() -> CarcassBreakdown {
        let data = ReferenceData::builtin();
        CarcassEngine::new(&data)
            .decompose(448.844, Species::Cattle, "Sapi Bali", Sex::Male)
            .unwrap()
    }

    #[test]
    fn test_flow_structure() {
        let breakdown = bali_breakdown();
        let flow = build_carcass_flow(&breakdown, "en");

        // 5 固定节点 + 11 组分 + Other
        assert_eq!(flow.nodes.len(), 17);
        assert_eq!(flow.links.len(), 4 + 12);
        assert_eq!(flow.nodes[0].label, "Live Weight");
        assert_eq!(flow.node_index("component.other"), Some(16));
    }

    #[test]
    fn test_flow_conserves_weight() {
        let breakdown = bali_breakdown();
        let flow = build_carcass_flow(&breakdown, "id");

        assert_relative_eq!(flow.outflow(NODE_LIVE_WEIGHT), 448.844, epsilon = 1e-9);
        assert_eq!(flow.outflow(NODE_CARCASS), breakdown.carcass_weight);
        assert_relative_eq!(
            flow.outflow(NODE_NON_CARCASS),
            breakdown.non_carcass_weight(),
            epsilon = 1e-9
        );
        assert_eq!(flow.nodes[1].label, "Karkas");
    }
}
