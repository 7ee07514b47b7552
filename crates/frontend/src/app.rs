use leptos::prelude::*;

use crate::domain::reports::ui::list::ReportTableList;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ReportTableList />
    }
}
