//! 模板分析：服務不可用時的後備方案
//!
//! Every sentence comes from a fixed table keyed by the dominant element, the
//! weak element, or (dominant element, gender). Output is a pure function of
//! its inputs.

use crate::domain::model::{AnalysisReport, ElementTally, Gender};

const GENERAL: [&str; 5] = [
    // 木
    "命局木气当令，如春木向阳，生发之力充沛，一生重在成长与开拓。早年多靠自身努力打基础，中年以后根基渐稳，贵在坚持方向、不轻易改弦易辙。",
    // 火
    "命局火势炎上，如日中天，气场明亮外放，一生多有展现自我的舞台。运势起伏较快，宜在顺境时积累、逆境时收敛，方能长久。",
    // 土
    "命局土气厚重，如大地载物，根基稳固，一生以踏实守成见长。发展节奏偏慢但后劲十足，越到中晚年越见成就。",
    // 金
    "命局金气刚健，如宝剑出鞘，原则分明，一生重在决断与执行。遇事果敢而少犹豫，宜以柔济刚，方能化锋芒为助力。",
    // 水
    "命局水势充盈，如江河奔流，智慧灵动，一生善于随势而变。机遇多而分散，贵在确定主线、聚水成渊。",
];

const PERSONALITY: [[&str; 2]; 5] = [
    [
        "性格正直仁厚，富有上进心，做事有计划、有担当，乐于提携他人。不足之处在于有时过于固执，认定的事情不易回头。",
        "性格温婉而有韧性，心地善良，富有同情心，做事条理清晰。不足之处在于容易思虑过多，对自己要求偏高。",
    ],
    [
        "性格热情开朗，行动力强，待人真诚直率，具有感染力和领导气质。不足之处在于性子较急，情绪来得快去得也快。",
        "性格明朗大方，表达能力出众，重情重义，善于营造氛围。不足之处在于情绪起伏较明显，容易因小事上心。",
    ],
    [
        "性格稳重踏实，诚实守信，做事脚踏实地，是值得依靠的人。不足之处在于有时保守迟缓，面对变化适应较慢。",
        "性格温和包容，耐心细致，重视家庭与承诺，给人安全感。不足之处在于不善拒绝，容易把压力留给自己。",
    ],
    [
        "性格果断刚毅，重义气、讲原则，执行力强，遇事冷静。不足之处在于言辞偏硬，有时让人觉得难以亲近。",
        "性格独立干练，审美出众，做事讲究效率与标准，外柔内刚。不足之处在于对人对己都偏严格，不易放松。",
    ],
    [
        "性格聪慧机敏，思维灵活，善于观察和变通，适应能力强。不足之处在于想法多而定性不足，容易虎头蛇尾。",
        "性格灵秀柔和，直觉敏锐，善解人意，沟通能力强。不足之处在于容易受环境和他人情绪影响，决断偏慢。",
    ],
];

const CAREER: [&str; 5] = [
    "事业上适合教育、文化、出版、医疗、园艺及环保等需要长期培育的行业。宜走稳步晋升的路线，三十五岁前后有一次明显的上升机会。",
    "事业上适合传媒、演艺、餐饮、能源、电子及市场营销等需要曝光与活力的行业。适合站到台前，靠个人影响力打开局面。",
    "事业上适合房地产、建筑、农业、仓储物流、行政管理等讲究积累的行业。越稳越旺，不宜频繁跳槽，深耕一地更易成事。",
    "事业上适合金融、法律、机械制造、军警及技术管理等需要决断与规范的行业。适合担任把关和决策的角色，中年后易掌实权。",
    "事业上适合贸易、物流、旅游、咨询、互联网及研究等需要流动与智慧的行业。适合以专业能力服务多方，灵活接项目也能有不错收益。",
];

const LOVE: [[&str; 2]; 5] = [
    [
        "感情中是有责任感的伴侣，重视对方的成长，愿意为家庭长远打算。宜晚婚，与性情温和、能包容自己固执一面的伴侣最为相合。",
        "感情中细腻专一，重视精神上的交流，一旦认定便全心投入。宜选择成熟稳重、能给予安全感的伴侣，婚后家庭和睦。",
    ],
    [
        "感情中热烈主动，浪漫而慷慨，容易一见钟情。需注意给伴侣留出空间，遇到分歧时先冷静再沟通，婚姻方能长久。",
        "感情中真挚热情，爱憎分明，很能带动两人关系的氛围。宜选择性情沉稳、能接住自己情绪的伴侣，互补则感情稳定。",
    ],
    [
        "感情中忠实可靠，不善甜言蜜语但用行动表达关心，是顾家型伴侣。宜多一些浪漫和表达，让对方感受到心意。",
        "感情中温柔体贴，重视承诺与长久，适合细水长流的关系。需学会表达自身需求，不要一味迁就。",
    ],
    [
        "感情中讲原则、重承诺，对伴侣有保护欲。需注意说话方式，柔软一些更能打动对方，宜与性格温和灵活的人相伴。",
        "感情中独立有主见，对伴侣要求较高，一旦投入则忠贞不渝。宜选择心胸开阔、欣赏自己能力的伴侣。",
    ],
    [
        "感情中体贴风趣，懂得照顾对方感受，异性缘较好。需要在选择上更加专注，定下心来方能收获稳定婚姻。",
        "感情中温柔多情，善于体察伴侣心意，感情生活丰富。宜选择踏实可靠、能给出明确承诺的伴侣。",
    ],
];

const HEALTH: [&str; 5] = [
    "木旺之人需留意肝胆与筋骨，避免熬夜和长期情绪压抑，多做伸展类运动。",
    "火旺之人需留意心血管与睡眠，忌过度兴奋与辛辣燥热饮食，宜多静心休息。",
    "土旺之人需留意脾胃与消化系统，饮食宜定时定量，少食生冷油腻。",
    "金旺之人需留意肺部、呼吸道与皮肤，注意季节转换时的保暖防燥。",
    "水旺之人需留意肾脏、泌尿及内分泌系统，避免久坐受寒，保持适度运动。",
];

const WEALTH: [&str; 5] = [
    "财运属于稳步积累型，适合长期定投、教育与成长类资产，忌急于求成。",
    "财运来得快去得也快，收入机会多，但需控制冲动消费，宜建立强制储蓄。",
    "财运稳健，适合不动产、实物资产及保守型理财，中年后财富逐步丰厚。",
    "财运与决断力相关，适合在充分研究后集中配置，宜设定止损，避免因好胜而加码。",
    "财运流动性强，适合多元化配置与现金流型投资，忌把资金分散得过于零碎。",
];

/// 補弱建議，按偏弱的五行索引
const WEAK_SUPPORT: [&str; 5] = [
    "可多接触绿色植物，多往东方发展，以青绿色为幸运色",
    "可多晒太阳、保持运动，多往南方发展，以红紫色为幸运色",
    "可多亲近自然、作息规律，宜在出生地附近发展，以黄褐色为幸运色",
    "可培养条理和规划，多往西方发展，以白色和金色为幸运色",
    "可多学习思考、亲近水边，多往北方发展，以黑蓝色为幸运色",
];

const WEAK_HEALTH: [&str; 5] = [
    "木气不足，平日宜多吃绿色蔬菜，舒展肝气。",
    "火气不足，平日宜注意保暖，增强心肺功能。",
    "土气不足，平日宜养护脾胃，饮食清淡规律。",
    "金气不足，平日宜加强呼吸锻炼，提升免疫力。",
    "水气不足，平日宜多补充水分，注意肾脏保养。",
];

fn gender_slot(gender: Gender) -> usize {
    match gender {
        Gender::Male => 0,
        Gender::Female => 1,
    }
}

fn honorific(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "先生",
        Gender::Female => "女士",
    }
}

/// Build the six-section report from the element tally alone.
pub fn generate(tally: &ElementTally, name: &str, gender: Gender) -> AnalysisReport {
    let dominant = tally.dominant();
    let weak = tally.weakest();
    let d = dominant.index();
    let w = weak.index();

    tracing::debug!(%dominant, %weak, "Generating template analysis");

    AnalysisReport {
        general: format!(
            "{}{}的八字中{}元素最为旺盛（{}个），{}元素相对薄弱（{}个）。{}",
            name,
            honorific(gender),
            dominant,
            tally.get(dominant),
            weak,
            tally.get(weak),
            GENERAL[d]
        ),
        personality: PERSONALITY[d][gender_slot(gender)].to_string(),
        career: format!(
            "{}命局{}气偏弱，{}，可为事业增添助力。",
            CAREER[d], weak, WEAK_SUPPORT[w]
        ),
        love: LOVE[d][gender_slot(gender)].to_string(),
        health: format!("{}{}", HEALTH[d], WEAK_HEALTH[w]),
        wealth: format!(
            "{}五行中{}为财之短板，{}，有助于稳固财运。",
            WEALTH[d], weak, WEAK_SUPPORT[w]
        ),
    }
}
