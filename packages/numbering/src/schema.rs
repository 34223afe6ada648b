//! Static element schemas for the numbering part.
//!
//! One [`ElementSchema`] table per element kind, covering child cardinality,
//! the successor sets that fix relative child order, and attribute simple
//! types. Successor sets follow the WML content models: `w:abstractNum`
//! sorts before `w:num` under the root, `w:startOverride` before a level
//! redefinition, and the `w:numPr` singletons before the tracked-change
//! paragraph properties not modeled here.

use wordml_oxml::{AttributeRule, AttributeType, Cardinality, ChildRule, ElementSchema};

/// Prefix used for the WordprocessingML main namespace.
pub const W_PREFIX: &str = "w";

/// WordprocessingML main namespace URI.
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// ST_MultiLevelType values.
pub const ST_MULTI_LEVEL_TYPE: &[&str] = &["singleLevel", "multilevel", "hybridMultilevel"];

/// ST_NumberFormat values (the subset this model accepts).
pub const ST_NUMBER_FORMAT: &[&str] = &[
    "decimal",
    "upperRoman",
    "lowerRoman",
    "upperLetter",
    "lowerLetter",
    "ordinal",
    "cardinalText",
    "ordinalText",
    "bullet",
    "none",
];

/// `<w:numbering>` — the numbering part root.
pub const NUMBERING: ElementSchema = ElementSchema {
    tag: "w:numbering",
    children: &[
        ChildRule {
            tag: "w:abstractNum",
            cardinality: Cardinality::ZeroOrMore,
            successors: &["w:num"],
        },
        ChildRule {
            tag: "w:num",
            cardinality: Cardinality::ZeroOrMore,
            successors: &["w:numIdMacAtCleanup"],
        },
    ],
    attributes: &[],
};

/// `<w:abstractNum>` — a reusable list-formatting template.
pub const ABSTRACT_NUM: ElementSchema = ElementSchema {
    tag: "w:abstractNum",
    children: &[
        ChildRule {
            tag: "w:nsid",
            cardinality: Cardinality::OneAndOnlyOne,
            successors: &[],
        },
        ChildRule {
            tag: "w:multiLevelType",
            cardinality: Cardinality::OneAndOnlyOne,
            successors: &[],
        },
        ChildRule {
            tag: "w:lvl",
            cardinality: Cardinality::ZeroOrMore,
            successors: &[],
        },
    ],
    attributes: &[AttributeRule {
        name: "w:abstractNumId",
        ty: AttributeType::DecimalNumber,
    }],
};

/// `<w:num>` — a concrete list instantiation bound to one template.
pub const NUM: ElementSchema = ElementSchema {
    tag: "w:num",
    children: &[
        ChildRule {
            tag: "w:abstractNumId",
            cardinality: Cardinality::OneAndOnlyOne,
            successors: &["w:lvlOverride"],
        },
        ChildRule {
            tag: "w:lvlOverride",
            cardinality: Cardinality::ZeroOrMore,
            successors: &[],
        },
    ],
    attributes: &[AttributeRule {
        name: "w:numId",
        ty: AttributeType::DecimalNumber,
    }],
};

/// `<w:lvl>` — one indentation level's default formatting.
pub const LVL: ElementSchema = ElementSchema {
    tag: "w:lvl",
    children: &[
        ChildRule {
            tag: "w:start",
            cardinality: Cardinality::OneAndOnlyOne,
            successors: &[],
        },
        ChildRule {
            tag: "w:numFmt",
            cardinality: Cardinality::OneAndOnlyOne,
            successors: &[],
        },
    ],
    attributes: &[AttributeRule {
        name: "w:ilvl",
        ty: AttributeType::DecimalNumber,
    }],
};

/// `<w:lvlOverride>` — a per-instance override of one level.
pub const LVL_OVERRIDE: ElementSchema = ElementSchema {
    tag: "w:lvlOverride",
    children: &[ChildRule {
        tag: "w:startOverride",
        cardinality: Cardinality::ZeroOrOne,
        successors: &["w:lvl"],
    }],
    attributes: &[AttributeRule {
        name: "w:ilvl",
        ty: AttributeType::DecimalNumber,
    }],
};

/// `<w:numPr>` — numbering properties applied to a paragraph.
pub const NUM_PR: ElementSchema = ElementSchema {
    tag: "w:numPr",
    children: &[
        ChildRule {
            tag: "w:ilvl",
            cardinality: Cardinality::ZeroOrOne,
            successors: &["w:numId", "w:numberingChange", "w:ins"],
        },
        ChildRule {
            tag: "w:numId",
            cardinality: Cardinality::ZeroOrOne,
            successors: &["w:numberingChange", "w:ins"],
        },
    ],
    attributes: &[],
};

/// `<w:nsid>` — opaque numbering-set identifier.
pub const NSID: ElementSchema = ElementSchema {
    tag: "w:nsid",
    children: &[],
    attributes: &[AttributeRule {
        name: "w:val",
        ty: AttributeType::Text,
    }],
};

/// `<w:multiLevelType>` — single-level vs multilevel template kind.
pub const MULTI_LEVEL_TYPE: ElementSchema = ElementSchema {
    tag: "w:multiLevelType",
    children: &[],
    attributes: &[AttributeRule {
        name: "w:val",
        ty: AttributeType::Enumeration(ST_MULTI_LEVEL_TYPE),
    }],
};

/// `<w:start>` — first value used at a level.
pub const START: ElementSchema = ElementSchema {
    tag: "w:start",
    children: &[],
    attributes: &[AttributeRule {
        name: "w:val",
        ty: AttributeType::DecimalNumber,
    }],
};

/// `<w:numFmt>` — number format of a level.
pub const NUM_FMT: ElementSchema = ElementSchema {
    tag: "w:numFmt",
    children: &[],
    attributes: &[AttributeRule {
        name: "w:val",
        ty: AttributeType::Enumeration(ST_NUMBER_FORMAT),
    }],
};

/// `<w:startOverride>` — per-instance starting value of one level.
pub const START_OVERRIDE: ElementSchema = ElementSchema {
    tag: "w:startOverride",
    children: &[],
    attributes: &[AttributeRule {
        name: "w:val",
        ty: AttributeType::DecimalNumber,
    }],
};

/// `<w:abstractNumId>` as the reference child of `<w:num>`.
pub const ABSTRACT_NUM_ID_REF: ElementSchema = ElementSchema {
    tag: "w:abstractNumId",
    children: &[],
    attributes: &[AttributeRule {
        name: "w:val",
        ty: AttributeType::DecimalNumber,
    }],
};

/// `<w:ilvl>` as the level child of `<w:numPr>`.
pub const ILVL_REF: ElementSchema = ElementSchema {
    tag: "w:ilvl",
    children: &[],
    attributes: &[AttributeRule {
        name: "w:val",
        ty: AttributeType::DecimalNumber,
    }],
};

/// `<w:numId>` as the instance-reference child of `<w:numPr>`.
pub const NUM_ID_REF: ElementSchema = ElementSchema {
    tag: "w:numId",
    children: &[],
    attributes: &[AttributeRule {
        name: "w:val",
        ty: AttributeType::DecimalNumber,
    }],
};
