use crate::infra::{parse_answer, parse_date};
use ai_dependency::assessment::{
    action_items, analyze_breakdown, forecast_scores, motivational_quote, questions_for,
    usage_patterns, weighted_score, AssessmentReport, DependencyArea, Profession, Questionnaire,
    ResponseSet, Score, UsagePatterns, WeightedScore, FORECAST_DAYS,
};
use ai_dependency::error::AppError;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Profession label, e.g. "Developer" or "Project Manager"
    #[arg(long)]
    pub(crate) profession: Option<String>,
    /// Answer as QUESTION=LABEL; repeat for each question
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, String)>,
    /// Date projections are counted from (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct BreakdownArgs {
    /// Answer as QUESTION=LABEL for daily_usage, decision_making and content_creation
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub(crate) struct WeightedArgs {
    /// Profession whose question set is scored
    #[arg(long)]
    pub(crate) profession: String,
    /// Answer as KEY=LABEL; unanswered questions count as Never
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, String)>,
    /// Earlier scores, oldest first, e.g. 40,45,52; three or more enable the forecast
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub(crate) history: Vec<u8>,
    /// Print the weighted questions for the profession instead of scoring
    #[arg(long)]
    pub(crate) list_questions: bool,
}

pub(crate) fn run_questions() {
    let view = Questionnaire::standard().view();

    println!("AI dependency questionnaire");
    for question in &view.questions {
        println!("- {}: {}", question.id, question.prompt);
    }

    let options: Vec<String> = view
        .options
        .iter()
        .map(|option| format!("{} ({})", option.label, option.percent))
        .collect();
    println!("\nAnswer options: {}", options.join(", "));

    println!("\nProfessions");
    for entry in &view.professions {
        println!("- {} ({})", entry.profession, entry.persona);
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        profession,
        answers,
        as_of,
    } = args;

    let profession = profession
        .map(|raw| raw.parse::<Profession>())
        .transpose()?;
    let responses = ResponseSet::from_labels(answers)?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let report = AssessmentReport::build(profession, &responses, as_of)?;
    render_score_report(&responses, &report, as_of);
    Ok(())
}

pub(crate) fn run_breakdown(args: BreakdownArgs) -> Result<(), AppError> {
    let responses = ResponseSet::from_labels(args.answers)?;
    let breakdown = analyze_breakdown(&responses)?;

    println!("Usage area breakdown");
    for area in DependencyArea::ordered() {
        println!("- {}: {}", area.label(), breakdown.value(area));
    }
    println!(
        "\nHighest dependency: {}",
        breakdown.highest_dependency.label()
    );
    println!("Lowest dependency: {}", breakdown.lowest_dependency.label());
    Ok(())
}

pub(crate) fn run_weighted(args: WeightedArgs) -> Result<(), AppError> {
    let profession = args.profession.parse::<Profession>()?;
    let questions = questions_for(profession);

    if args.list_questions {
        println!("Weighted questions for {profession}");
        for question in &questions {
            println!(
                "- {} (weight {}): {}",
                question.key, question.weight, question.prompt
            );
        }
        return Ok(());
    }

    let responses = ResponseSet::from_labels(args.answers)?;
    let weighted = weighted_score(&responses, &questions);
    let patterns = usage_patterns(profession, &responses);
    let history: Vec<Score> = args
        .history
        .into_iter()
        .map(|value| Score::saturating(u64::from(value)))
        .collect();
    let forecast = forecast_scores(&history, profession, FORECAST_DAYS);
    render_weighted(profession, &weighted, &patterns, forecast.as_deref());
    Ok(())
}

fn render_score_report(responses: &ResponseSet, report: &AssessmentReport, as_of: NaiveDate) {
    println!("AI dependency assessment (evaluated {as_of})");
    if let (Some(profession), Some(persona)) = (report.profession, report.persona) {
        println!("Profession: {profession} ({persona})");
    }

    println!("\nAnswers");
    for (question, level) in responses.iter() {
        println!("- {}: {} ({})", question, level, level.percent());
    }

    println!("\nScore: {}/100", report.score);
    println!("{}", report.message);

    println!("\nGauge bands");
    for band in &report.gauge.bands {
        let marker = if band.risk_level == report.risk_level {
            " <"
        } else {
            ""
        };
        println!(
            "- {}-{} {} [{}]{}",
            band.start,
            band.end,
            band.risk_level.label(),
            band.color,
            marker
        );
    }

    println!("\nProjections if habits continue");
    for projection in &report.projections {
        println!(
            "- {} ({}): {} ({})",
            projection.label,
            projection.target_date,
            projection.projected_score,
            projection.risk_level.label()
        );
    }

    println!("\nDetox plan");
    for step in &report.detox_plan {
        println!("- {step}");
    }

    if let Some(breakdown) = &report.breakdown {
        println!(
            "\nHighest dependency: {}; lowest: {}",
            breakdown.highest_dependency.label(),
            breakdown.lowest_dependency.label()
        );
    }
}

fn render_weighted(
    profession: Profession,
    weighted: &WeightedScore,
    patterns: &UsagePatterns,
    forecast: Option<&[Score]>,
) {
    println!(
        "Weighted assessment for {} ({})",
        profession,
        profession.persona()
    );

    println!("\nContributions");
    for line in &weighted.lines {
        println!(
            "- {} | {} x {} = {}",
            line.key, line.response, line.weight, line.contribution
        );
    }

    let risk = weighted.score.risk_level();
    println!(
        "\nScore: {}/100 ({} of {} points)",
        weighted.score, weighted.total, weighted.maximum
    );
    println!("{}: {}", risk.dependency_label(), risk.tagline());
    println!("{}", risk.message());

    println!(
        "\nCritical areas: {} (average {:.1}, trend {})",
        patterns.critical_areas.join(", "),
        patterns.critical_score,
        patterns.overall_trend.label()
    );

    let items = action_items(weighted.score, patterns);
    if !items.is_empty() {
        println!("\nAction items");
        for item in items {
            println!("- {item}");
        }
    }

    if let Some(forecast) = forecast {
        let points: Vec<String> = forecast.iter().map(Score::to_string).collect();
        println!("\n{}-day forecast: {}", forecast.len(), points.join(" "));
    }

    println!(
        "\n\"{}\"",
        motivational_quote(u64::from(weighted.score.value()))
    );
}
