//! Element info table shown by the click-to-open panel.

#[cfg(test)]
#[path = "elements_test.rs"]
mod elements_test;

/// Descriptive record for one clickable element (or element family).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementEntry {
    /// Identifier carried by the clickable tile (`data-key`).
    pub key: &'static str,
    pub name_zh: &'static str,
    pub symbol: &'static str,
    /// Absent for family entries such as the halogens.
    pub atomic_number: Option<u8>,
    pub text: &'static str,
}

impl ElementEntry {
    /// Panel heading: name, symbol and atomic number when known.
    #[must_use]
    pub fn title(&self) -> String {
        match self.atomic_number {
            Some(z) => format!("{} {}（原子序数 {z}）", self.name_zh, self.symbol),
            None => format!("{} {}", self.name_zh, self.symbol),
        }
    }
}

/// Look up an element by its tile key.
#[must_use]
pub fn lookup_element(key: &str) -> Option<&'static ElementEntry> {
    ELEMENTS.iter().find(|e| e.key == key)
}

pub const ELEMENTS: &[ElementEntry] = &[
    ElementEntry {
        key: "hydrogen",
        name_zh: "氢",
        symbol: "H",
        atomic_number: Some(1),
        text: "最轻的元素。水溶液中以 H⁺（H₃O⁺）形式参与酸碱平衡，溶液酸度会影响弱酸根沉淀的溶解度。",
    },
    ElementEntry {
        key: "carbon",
        name_zh: "碳",
        symbol: "C",
        atomic_number: Some(6),
        text: "以 CO₃²⁻ 形式与 Ca²⁺、Ba²⁺ 等生成碳酸盐沉淀；碳酸盐沉淀可溶于强酸并放出 CO₂。",
    },
    ElementEntry {
        key: "oxygen",
        name_zh: "氧",
        symbol: "O",
        atomic_number: Some(8),
        text: "含氧酸根（SO₄²⁻、CO₃²⁻、PO₄³⁻）与 OH⁻ 是常见沉淀剂中的组成部分。",
    },
    ElementEntry {
        key: "sodium",
        name_zh: "钠",
        symbol: "Na",
        atomic_number: Some(11),
        text: "碱金属。钠盐几乎都易溶于水，因此 Na⁺ 常作为“旁观离子”，不参与沉淀平衡。",
    },
    ElementEntry {
        key: "magnesium",
        name_zh: "镁",
        symbol: "Mg",
        atomic_number: Some(12),
        text: "Mg(OH)₂ 为白色难溶物，工业上由海水加石灰乳沉淀镁离子，是海水提镁的第一步。",
    },
    ElementEntry {
        key: "aluminium",
        name_zh: "铝",
        symbol: "Al",
        atomic_number: Some(13),
        text: "Al(OH)₃ 为两性氢氧化物，既溶于强酸也溶于强碱，沉淀时需控制溶液 pH。",
    },
    ElementEntry {
        key: "sulfur",
        name_zh: "硫",
        symbol: "S",
        atomic_number: Some(16),
        text: "S²⁻ 与多数重金属离子生成溶度积极小的硫化物，常用于废水中重金属的去除。",
    },
    ElementEntry {
        key: "chlorine",
        name_zh: "氯",
        symbol: "Cl",
        atomic_number: Some(17),
        text: "Cl⁻ 与 Ag⁺ 生成白色 AgCl 沉淀，这是检验氯离子的经典方法。",
    },
    ElementEntry {
        key: "potassium",
        name_zh: "钾",
        symbol: "K",
        atomic_number: Some(19),
        text: "碱金属。钾盐普遍易溶，与钠盐一样通常不形成沉淀。",
    },
    ElementEntry {
        key: "calcium",
        name_zh: "钙",
        symbol: "Ca",
        atomic_number: Some(20),
        text: "CaCO₃、CaF₂、CaSO₄ 都是常见的钙盐沉淀；水垢的主要成分是 CaCO₃。",
    },
    ElementEntry {
        key: "iron",
        name_zh: "铁",
        symbol: "Fe",
        atomic_number: Some(26),
        text: "Fe(OH)₃ 为红褐色沉淀，溶度积极小，在较低 pH 下即可沉淀完全，常用于除铁。",
    },
    ElementEntry {
        key: "copper",
        name_zh: "铜",
        symbol: "Cu",
        atomic_number: Some(29),
        text: "Cu(OH)₂ 为蓝色絮状沉淀；CuS 为黑色，溶度积非常小。",
    },
    ElementEntry {
        key: "zinc",
        name_zh: "锌",
        symbol: "Zn",
        atomic_number: Some(30),
        text: "ZnS 为白色沉淀，可利用沉淀转化将 ZnS 转化为更难溶的 CuS。",
    },
    ElementEntry {
        key: "silver",
        name_zh: "银",
        symbol: "Ag",
        atomic_number: Some(47),
        text: "卤化银 AgCl、AgBr、AgI 的溶度积依次减小，颜色由白到黄逐渐加深，可用于卤素离子鉴别。",
    },
    ElementEntry {
        key: "iodine",
        name_zh: "碘",
        symbol: "I",
        atomic_number: Some(53),
        text: "I⁻ 与 Pb²⁺ 生成亮黄色 PbI₂ 沉淀（“黄金雨”实验），与 Ag⁺ 生成黄色 AgI 沉淀。",
    },
    ElementEntry {
        key: "barium",
        name_zh: "钡",
        symbol: "Ba",
        atomic_number: Some(56),
        text: "可溶性钡盐有毒，但 BaSO₄ 极难溶且不溶于胃酸，可作 X 射线造影剂“钡餐”。",
    },
    ElementEntry {
        key: "lead",
        name_zh: "铅",
        symbol: "Pb",
        atomic_number: Some(82),
        text: "重金属。PbSO₄、PbI₂、PbS 均难溶，含铅废水常通过沉淀法处理。",
    },
    ElementEntry {
        key: "halogens",
        name_zh: "卤素",
        symbol: "VIIA",
        atomic_number: None,
        text: "第 VIIA 族元素（F、Cl、Br、I）。卤化银中除 AgF 外均难溶，溶解度随原子序数增大而减小。",
    },
];
