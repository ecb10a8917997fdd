use axum::{body::Body, response::Response};
use scraper::{ElementRef, Html, Selector};

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The trimmed text of every element matching `selector`, in document order.
#[track_caller]
pub(crate) fn select_texts(html: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).expect("invalid selector");

    html.select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_owned())
        .collect()
}

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

/// The `value` attribute of the input named `name` in `form`.
#[track_caller]
pub(crate) fn input_value<'a>(form: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    let selector = Selector::parse(&format!("input[name={name}]")).unwrap();

    form.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input named {name}"))
        .value()
        .attr("value")
}
