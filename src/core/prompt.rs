use crate::core::render::shichen_label;
use crate::domain::model::SectionKind;
use crate::domain::ports::NarrativeRequest;

/// System prompt: names the six headings the section parser looks for.
pub fn system_prompt() -> String {
    let headings: Vec<&str> = SectionKind::ALL.iter().map(|k| k.heading()).collect();
    format!(
        "你是一位专业的命理分析师，擅长根据八字进行解读。分析需依次包含以下部分：{}。\
         每个部分都要详细展开、有针对性，语言专业但通俗易懂，避免过度玄学化的表述，注重实用性和可操作性。",
        headings.join("、")
    )
}

pub fn user_prompt(request: &NarrativeRequest) -> String {
    let user = &request.user_data;
    let chart = &request.bazi_data;
    let tally = &chart.tally;

    let mut prompt = String::new();
    prompt.push_str("请根据以下信息进行八字分析：\n");
    prompt.push_str(&format!("姓名：{}\n", user.name));
    prompt.push_str(&format!("性别：{}\n", user.gender.label()));
    prompt.push_str(&format!(
        "出生日期：{}年{}月{}日\n",
        user.birth_year, user.birth_month, user.birth_day
    ));
    prompt.push_str(&format!("出生时辰：{}\n", shichen_label(user.birth_hour)));
    prompt.push_str(&format!(
        "历法：{}\n",
        if user.is_lunar { "农历" } else { "公历" }
    ));
    prompt.push_str(&format!("出生地点：{}\n\n", user.birth_place));

    prompt.push_str("八字信息：\n");
    for (label, pillar) in ["年柱", "月柱", "日柱", "时柱"].iter().zip(chart.pillars()) {
        prompt.push_str(&format!("{}：{}\n", label, pillar));
    }

    prompt.push_str(&format!(
        "\n五行统计：\n金：{} 木：{} 水：{} 火：{} 土：{}\n\n",
        tally.metal, tally.wood, tally.water, tally.fire, tally.earth
    ));

    prompt.push_str("请从以下几个方面进行分析，每个部分以对应标题开头：\n");
    let topics = [
        "整体八字格局和人生走向",
        "性格分析和优缺点",
        "适合的行业、事业发展规律和机遇",
        "感情特点、婚姻状况和适合的伴侣类型",
        "健康优势和需要注意的方面",
        "财运特点、积累财富的方式和理财建议",
    ];
    for (i, (kind, topic)) in SectionKind::ALL.iter().zip(topics).enumerate() {
        prompt.push_str(&format!("{}. {}：{}\n", i + 1, kind.heading(), topic));
    }
    prompt.push_str("\n请确保每个部分都有详细且有针对性的内容。");

    prompt
}
