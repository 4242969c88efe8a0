/// Page rendering
///
/// The whole page is one tera template: the seven form inputs, the eight
/// action buttons, the flash region and the results table. Autoescaping is on
/// because the template name ends in `.html`.
use serde::Serialize;
use tera::{Context as TeraContext, Tera};

use crate::{
    error::AppResult,
    models::{Action, View, KNOWN_REC_TYPES, RESULT_COLUMNS},
};

const PAGE_TEMPLATE_NAME: &str = "page.html";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Recommendation RESTful Service</title>
</head>
<body>
<div class="container">
  <h1>Recommendation RESTful Service</h1>

  <div id="flash_message">{% if flash %}{{ flash }}{% endif %}</div>

  <form id="rec_form" method="post" action="/">
    {% for field in fields %}
    <div class="form-group">
      <label for="rec_{{ field.name }}">{{ field.label }}:</label>
      <input type="text" id="rec_{{ field.name }}" name="{{ field.name }}" value="{{ field.value }}"{% if field.name == "rec_type" %} list="rec_types"{% endif %}>
    </div>
    {% endfor %}
    <datalist id="rec_types">
      {% for rec_type in rec_types %}<option value="{{ rec_type }}">{% endfor %}
    </datalist>

    <div class="form-group">
      {% for action in actions %}<button type="submit" id="{{ action }}-btn" name="action" value="{{ action }}">{{ action | capitalize }}</button>
      {% endfor %}
    </div>
  </form>

  <div id="search_results">
    {% if has_results %}
    <table class="table table-striped" cellpadding="10">
      <thead><tr>{% for column in columns %}<th class="col-md-2">{{ column }}</th>{% endfor %}</tr></thead>
      <tbody>
        {% for row in rows %}<tr id="row_{{ loop.index0 }}">{% for cell in row %}<td>{{ cell }}</td>{% endfor %}</tr>
        {% endfor %}
      </tbody>
    </table>
    {% endif %}
  </div>
</div>
</body>
</html>
"#;

#[derive(Debug, Serialize)]
struct FieldContext<'a> {
    name: &'static str,
    label: &'static str,
    value: &'a str,
}

pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, view: &View) -> AppResult<String> {
        let form = &view.form;
        let fields = [
            FieldContext { name: "id", label: "ID", value: &form.id },
            FieldContext { name: "product_id", label: "Product ID", value: &form.product_id },
            FieldContext { name: "product_name", label: "Product Name", value: &form.product_name },
            FieldContext { name: "rec_id", label: "Rec ID", value: &form.rec_id },
            FieldContext { name: "rec_name", label: "Rec Name", value: &form.rec_name },
            FieldContext { name: "rec_type", label: "Rec Type", value: &form.rec_type },
            FieldContext { name: "like_num", label: "Like", value: &form.like_num },
        ];

        let rows: Vec<[String; 7]> = view
            .results
            .iter()
            .flatten()
            .map(|record| record.table_row())
            .collect();

        let mut context = TeraContext::new();
        context.insert("flash", &view.flash);
        context.insert("fields", &fields);
        context.insert("rec_types", &KNOWN_REC_TYPES);
        context.insert("actions", &Action::ALL);
        context.insert("has_results", &view.results.is_some());
        context.insert("columns", &RESULT_COLUMNS);
        context.insert("rows", &rows);

        Ok(self.tera.render(PAGE_TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormState, RecommendationRecord};

    fn renderer() -> PageRenderer {
        PageRenderer::new().unwrap()
    }

    #[test]
    fn test_blank_view_has_form_and_buttons_but_no_table() {
        let html = renderer().render(&View::default()).unwrap();

        assert!(html.contains(r#"id="rec_product_name" name="product_name" value="""#));
        for action in Action::ALL {
            assert!(html.contains(&format!(r#"id="{}-btn""#, action)));
        }
        assert!(html.contains(r#"<div id="flash_message"></div>"#));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_form_values_and_flash_are_rendered() {
        let view = View {
            form: FormState {
                id: "3".to_string(),
                rec_type: "UP_SELL".to_string(),
                ..FormState::default()
            },
            flash: Some("Success".to_string()),
            results: None,
        };

        let html = renderer().render(&view).unwrap();
        assert!(html.contains(r#"name="id" value="3""#));
        assert!(html.contains(r#"name="rec_type" value="UP_SELL" list="rec_types""#));
        assert!(html.contains(r#"<div id="flash_message">Success</div>"#));
    }

    #[test]
    fn test_results_table_rows_in_server_order() {
        let records = vec![
            RecommendationRecord {
                id: Some(9),
                rec_name: "First".to_string(),
                ..RecommendationRecord::default()
            },
            RecommendationRecord {
                id: Some(4),
                rec_name: "Second".to_string(),
                ..RecommendationRecord::default()
            },
        ];
        let view = View {
            results: Some(records),
            ..View::default()
        };

        let html = renderer().render(&view).unwrap();
        assert!(html.contains(r#"<th class="col-md-2">Product Name</th>"#));
        let first = html.find(r#"<tr id="row_0"><td>9</td>"#).unwrap();
        let second = html.find(r#"<tr id="row_1"><td>4</td>"#).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_search_renders_header_only() {
        let view = View {
            results: Some(vec![]),
            ..View::default()
        };

        let html = renderer().render(&view).unwrap();
        assert!(html.contains("<table"));
        assert!(!html.contains("row_0"));
    }

    #[test]
    fn test_values_are_escaped() {
        let view = View {
            form: FormState {
                rec_name: "<script>alert(1)</script>".to_string(),
                ..FormState::default()
            },
            ..View::default()
        };

        let html = renderer().render(&view).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
