use anyhow::Result;
use nfl_genai_core::catalog::{
    default_model_id, default_personality_id, list_models, list_personalities,
};

pub fn models(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(list_models())?);
        return Ok(());
    }

    let rows: Vec<_> = list_models()
        .iter()
        .map(|m| (m.id, m.name, m.description))
        .collect();
    print!("{}", render_table(&rows, default_model_id()));
    Ok(())
}

pub fn personalities(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(list_personalities())?);
        return Ok(());
    }

    let rows: Vec<_> = list_personalities()
        .iter()
        .map(|p| (p.id, p.name, p.description))
        .collect();
    print!("{}", render_table(&rows, default_personality_id()));
    Ok(())
}

/// Renders `id  name  description` rows, marking the default with `*`.
fn render_table(rows: &[(&str, &str, &str)], default_id: &str) -> String {
    let id_width = rows.iter().map(|(id, _, _)| id.len()).max().unwrap_or(0);
    let name_width = rows.iter().map(|(_, name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (id, name, description) in rows {
        let marker = if *id == default_id { '*' } else { ' ' };
        out.push_str(&format!(
            "{} {:<id_width$}  {:<name_width$}  {}\n",
            marker,
            id,
            name,
            description,
            id_width = id_width,
            name_width = name_width,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_marks_default() {
        let rows = [("a", "Alpha", "first"), ("bb", "Beta", "second")];
        let table = render_table(&rows, "bb");

        assert_eq!(table, "  a   Alpha  first\n* bb  Beta   second\n");
    }
}
