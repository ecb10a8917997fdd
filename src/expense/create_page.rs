//! The page with the form for recording a new expense.
//!
//! The form is shared with the edit page. It is submitted as JSON to the
//! expense API and any validation message from the API is shown above the
//! submit button.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    AppState,
    category::{CATEGORY_ICONS, category_icon},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, FORM_ERROR_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement, base,
    },
    navigation::NavBar,
    timezone::get_local_date,
};

const SUBMIT_SCRIPT: &str = r#"
document.addEventListener('submit', async (event) => {
    const form = event.target.closest('form[data-expense-url]');
    if (!form) {
        return;
    }

    event.preventDefault();
    const error = form.querySelector('#form-error');
    const response = await fetch(form.dataset.expenseUrl, {
        method: form.dataset.method,
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(Object.fromEntries(new FormData(form))),
    });

    if (response.ok) {
        window.location.assign(form.dataset.redirectUrl);
        return;
    }

    const body = await response.json();
    error.textContent = body.message;
    error.hidden = false;
});
"#;

/// The state needed for the new expense page.
#[derive(Debug, Clone)]
pub struct CreateExpensePageState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the form for recording a new expense, with the date set to today.
pub async fn get_create_expense_page(State(state): State<CreateExpensePageState>) -> Response {
    let today = match get_local_date(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_page_response(),
    };

    let form = ExpenseFormView {
        submit_url: endpoints::EXPENSES_API.to_owned(),
        method: "POST",
        submit_label: "Add Expense",
        amount: String::new(),
        category: "",
        description: "",
        date: today.to_string(),
    };

    expense_form_page("Add Expense", endpoints::NEW_EXPENSE_VIEW, &form).into_response()
}

/// The values and target of the expense form.
pub(super) struct ExpenseFormView<'a> {
    pub submit_url: String,
    /// The HTTP method the form is sent with, "POST" or "PUT".
    pub method: &'static str,
    pub submit_label: &'static str,
    pub amount: String,
    pub category: &'a str,
    pub description: &'a str,
    /// The date as `YYYY-MM-DD`, the format used by date inputs.
    pub date: String,
}

pub(super) fn expense_form_page(
    title: &str,
    active_endpoint: &str,
    form: &ExpenseFormView,
) -> Markup {
    let nav_bar = NavBar::new(active_endpoint).into_html();

    let content = html!(
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h2 class="w-full text-xl font-bold mb-4" { (title) }
            (expense_form(form))
        }
    );

    let scripts = [HeadElement::ScriptSource(PreEscaped(SUBMIT_SCRIPT.to_owned()))];

    base(title, &scripts, &content)
}

fn expense_form(form: &ExpenseFormView) -> Markup {
    let is_custom_category = !form.category.is_empty()
        && CATEGORY_ICONS
            .iter()
            .all(|(name, _)| *name != form.category);

    html!(
        form
            data-expense-url=(form.submit_url)
            data-method=(form.method)
            data-redirect-url=(endpoints::EXPENSES_VIEW)
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    id="amount"
                    type="number"
                    name="amount"
                    min="0"
                    step="0.01"
                    placeholder="0.00"
                    required
                    autofocus
                    value=(form.amount)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                select id="category" name="category" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" disabled selected[form.category.is_empty()]
                    {
                        "Select a category"
                    }

                    @if is_custom_category {
                        option value=(form.category) selected
                        {
                            (category_icon(form.category)) " " (form.category)
                        }
                    }

                    @for (name, icon) in CATEGORY_ICONS {
                        option value=(name) selected[name == form.category]
                        {
                            (icon) " " (name)
                        }
                    }
                }
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="What was it for?"
                    value=(form.description)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                input
                    id="date"
                    type="date"
                    name="date"
                    required
                    value=(form.date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            p id="form-error" role="alert" class=(FORM_ERROR_STYLE) hidden {}

            div class="flex gap-4"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { (form.submit_label) }
                a href=(endpoints::EXPENSES_VIEW) class=(BUTTON_SECONDARY_STYLE) { "Cancel" }
            }
        }
    )
}
