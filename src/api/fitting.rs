use axum::{
    extract::State,
    response::Html,
    Form,
};
use std::collections::HashMap;

use super::routes::AppState;
use crate::error::{Error, Result};
use crate::models::{
    ClubModel, CreateUser, Recommendation, Shot, ShotMeasurements, User, SHOTS_PER_SESSION,
};

const INDEX_HTML: &str = include_str!("templates/index.html");

/// GET /
///
/// Serves the intake form
pub async fn intake_form() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// A parsed fitting session submission: the fitter's details, the club
/// model name to resolve, and the measurements for each shot slot.
#[derive(Debug)]
pub struct FittingForm {
    pub name: String,
    pub email: String,
    pub club_model: String,
    pub shots: Vec<ShotMeasurements>,
}

impl FittingForm {
    /// Pulls the fixed field set out of the submitted key/value pairs.
    /// Field names mirror the form markup: the ten metrics carry a
    /// `_1` / `_2` / `_3` slot suffix.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self> {
        let name = text_field(fields, "name")?;
        let email = text_field(fields, "email")?;
        let club_model = text_field(fields, "club_model")?;

        let mut shots = Vec::with_capacity(SHOTS_PER_SESSION);
        for slot in 1..=SHOTS_PER_SESSION {
            shots.push(ShotMeasurements {
                club_head_speed: metric_field(fields, "club_head_speed", slot)?,
                ball_speed: metric_field(fields, "ball_speed", slot)?,
                launch_angle: metric_field(fields, "launch_angle", slot)?,
                spin_rate: metric_field(fields, "spin_rate", slot)?,
                peak_height: metric_field(fields, "peak_height", slot)?,
                land_angle: metric_field(fields, "land_angle", slot)?,
                club_path: metric_field(fields, "club_path", slot)?,
                club_face_angle: metric_field(fields, "club_face_angle", slot)?,
                attack_angle: metric_field(fields, "attack_angle", slot)?,
                ft_off_line: metric_field(fields, "ft_off_line", slot)?,
            });
        }

        Ok(FittingForm {
            name,
            email,
            club_model,
            shots,
        })
    }
}

fn text_field(fields: &HashMap<String, String>, key: &str) -> Result<String> {
    fields
        .get(key)
        .cloned()
        .ok_or_else(|| Error::MissingField(key.to_string()))
}

/// Measurements arrive as form strings; they are coerced to f64 here,
/// before anything touches storage, so a bad value rejects the whole
/// submission.
fn metric_field(fields: &HashMap<String, String>, base: &str, slot: usize) -> Result<f64> {
    let key = format!("{base}_{slot}");
    let raw = fields
        .get(&key)
        .ok_or_else(|| Error::MissingField(key.clone()))?;

    raw.trim().parse::<f64>().map_err(|_| Error::InvalidField {
        field: key,
        value: raw.clone(),
    })
}

/// POST /results
///
/// Records one fitting session: resolves the club model by name, writes
/// the user and the three shots in one transaction, then renders the
/// results page with the recommender's output.
pub async fn submit_fitting(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>> {
    let form = FittingForm::from_fields(&fields)?;

    let club_model = state
        .club_model_service
        .find_by_name(&form.club_model)
        .await?
        .ok_or_else(|| Error::NotFound(format!("club model \"{}\"", form.club_model)))?;

    let user_data = CreateUser {
        name: form.name,
        email: form.email,
    };

    let (user, shots) = state
        .fitting_service
        .record_session(&club_model, user_data, &form.shots)
        .await?;

    let recommendation = state.recommender.recommend(&club_model, &shots);

    Ok(Html(render_results_page(
        &user,
        &club_model,
        &shots,
        &recommendation,
    )))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_results_page(
    user: &User,
    club_model: &ClubModel,
    shots: &[Shot],
    recommendation: &Recommendation,
) -> String {
    let shot_rows: String = shots
        .iter()
        .enumerate()
        .map(|(i, shot)| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                i + 1,
                shot.club_head_speed,
                shot.ball_speed,
                shot.launch_angle,
                shot.spin_rate,
                shot.peak_height,
                shot.land_angle,
                shot.club_path,
                shot.club_face_angle,
                shot.attack_angle,
                shot.ft_off_line,
            )
        })
        .collect();

    let settings = [
        ("Loft sleeve", recommendation.loft_sleeve_setting.as_deref()),
        (
            "Sliding weight",
            recommendation.sliding_weight_setting.as_deref(),
        ),
    ]
    .into_iter()
    .filter_map(|(label, setting)| {
        setting.map(|s| format!("<li>{}: {}</li>", label, escape_html(s)))
    })
    .collect::<String>();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Fitting Results</title>
    <style>
        body {{ font-family: sans-serif; margin: 2em; max-width: 60em; }}
        table {{ border-collapse: collapse; }}
        th, td {{ border: 1px solid #ccc; padding: 0.3em 0.6em; text-align: right; }}
        th {{ background: #f0f0f0; }}
    </style>
</head>
<body>
    <h1>Fitting Results</h1>
    <p>Session recorded for {name} ({email}) with the <strong>{club}</strong>.</p>

    <h2>Recorded Shots</h2>
    <table>
        <tr>
            <th>Shot</th><th>Club head speed</th><th>Ball speed</th><th>Launch angle</th>
            <th>Spin rate</th><th>Peak height</th><th>Land angle</th><th>Club path</th>
            <th>Club face angle</th><th>Attack angle</th><th>Ft off line</th>
        </tr>
        {shot_rows}
    </table>

    <h2>Recommended Adjustments</h2>
    <p>{summary}</p>
    <ul>{settings}</ul>

    <p><a href="/">Record another session</a></p>
</body>
</html>"#,
        name = escape_html(&user.name),
        email = escape_html(&user.email),
        club = escape_html(&club_model.name),
        shot_rows = shot_rows,
        summary = escape_html(&recommendation.summary),
        settings = settings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const METRICS: [&str; 10] = [
        "club_head_speed",
        "ball_speed",
        "launch_angle",
        "spin_rate",
        "peak_height",
        "land_angle",
        "club_path",
        "club_face_angle",
        "attack_angle",
        "ft_off_line",
    ];

    fn valid_fields() -> HashMap<String, String> {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Alex".to_string());
        fields.insert("email".to_string(), "a@x.com".to_string());
        fields.insert("club_model".to_string(), "Driver X".to_string());

        for slot in 1..=SHOTS_PER_SESSION {
            for (m, metric) in METRICS.iter().enumerate() {
                fields.insert(
                    format!("{metric}_{slot}"),
                    format!("{}.{}", 100 + slot * 10 + m, m),
                );
            }
        }

        fields
    }

    #[test]
    fn parses_a_complete_submission() {
        let form = FittingForm::from_fields(&valid_fields()).unwrap();

        assert_eq!(form.name, "Alex");
        assert_eq!(form.email, "a@x.com");
        assert_eq!(form.club_model, "Driver X");
        assert_eq!(form.shots.len(), SHOTS_PER_SESSION);
        assert_eq!(form.shots[0].club_head_speed, 110.0);
        assert_eq!(form.shots[2].ft_off_line, 139.9);
    }

    #[test]
    fn missing_text_field_is_reported_by_name() {
        let mut fields = valid_fields();
        fields.remove("email");

        match FittingForm::from_fields(&fields) {
            Err(Error::MissingField(key)) => assert_eq!(key, "email"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn missing_metric_field_is_reported_with_slot_suffix() {
        let mut fields = valid_fields();
        fields.remove("spin_rate_2");

        match FittingForm::from_fields(&fields) {
            Err(Error::MissingField(key)) => assert_eq!(key, "spin_rate_2"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_metric_is_rejected() {
        let mut fields = valid_fields();
        fields.insert("launch_angle_3".to_string(), "fast".to_string());

        match FittingForm::from_fields(&fields) {
            Err(Error::InvalidField { field, value }) => {
                assert_eq!(field, "launch_angle_3");
                assert_eq!(value, "fast");
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn metric_values_tolerate_surrounding_whitespace() {
        let mut fields = valid_fields();
        fields.insert("ball_speed_1".to_string(), " 162.5 ".to_string());

        let form = FittingForm::from_fields(&fields).unwrap();
        assert_eq!(form.shots[0].ball_speed, 162.5);
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
    }
}
