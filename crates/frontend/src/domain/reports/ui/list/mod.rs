use contracts::domain::{filter_entries, FilterCriteria, FilterField, ReportEntry};
use contracts::enums::{Branch, ChecklistStatus, ReportType};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::reports::api::fetch_report_entries;
use crate::shared::components::ui::Select;
use crate::shared::export::export_to_excel;

const EXPORT_FILENAME: &str = "FilteredData.xlsx";

fn with_all_option<I: IntoIterator<Item = &'static str>>(codes: I) -> Vec<(String, String)> {
    std::iter::once((String::new(), "All".to_string()))
        .chain(codes.into_iter().map(|c| (c.to_string(), c.to_string())))
        .collect()
}

#[component]
pub fn ReportTableList() -> impl IntoView {
    let (data, set_data) = signal(Vec::<ReportEntry>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let criteria = RwSignal::new(FilterCriteria::default());

    // Derived view: recomputed whenever the dataset or the criteria change.
    let filtered = Memo::new(move |_| filter_entries(&data.get(), &criteria.get()));

    // A fetch resolving after teardown must not write into disposed state.
    let cancelled = StoredValue::new(false);
    on_cleanup(move || {
        cancelled.try_update_value(|c| *c = true);
    });

    Effect::new(move || {
        spawn_local(async move {
            let result = fetch_report_entries().await;
            if cancelled.try_get_value().unwrap_or(true) {
                return;
            }
            match result {
                Ok(entries) => {
                    set_data.set(entries);
                    set_loading.set(false);
                }
                Err(e) => {
                    log!("Failed to load report data: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    let on_criteria_change = move |field: FilterField, value: String| {
        criteria.update(|c| c.set(field, value));
    };

    let on_export = move |_| {
        if let Err(e) = export_to_excel(&filtered.get(), EXPORT_FILENAME) {
            log!("Export failed: {}", e);
        }
    };

    let report_type_options = with_all_option(ReportType::all().iter().map(|t| t.as_str()));
    let branch_options = with_all_option(Branch::all().iter().map(|b| b.as_str()));
    let checklist_options = with_all_option(ChecklistStatus::all().iter().map(|c| c.as_str()));

    view! {
        <div class="report-table-list">
            <h1 style="margin: 0 0 12px 0;">
                "Data Table with Filters"
                {move || {
                    let total = data.get().len();
                    if total == 0 {
                        String::new()
                    } else {
                        let active = criteria.get().active_count();
                        if active > 0 {
                            format!(
                                " - {} of {} records, {} filter(s) active",
                                filtered.get().len(),
                                total,
                                active,
                            )
                        } else {
                            format!(" - {} records", total)
                        }
                    }
                }}
            </h1>

            <div
                class="filters"
                style="display: flex; align-items: flex-end; gap: 12px; margin-bottom: 12px; flex-wrap: wrap;"
            >
                <div class="form__group">
                    <label class="form__label">"Date Range:"</label>
                    <div style="display: flex; align-items: center; gap: 6px;">
                        <input
                            type="date"
                            prop:value=move || criteria.get().start_date
                            on:input=move |ev| {
                                on_criteria_change(FilterField::StartDate, event_target_value(&ev));
                            }
                            style="padding: 4px 6px; border-radius: 4px; border: 1px solid var(--border-color);"
                        />
                        <input
                            type="date"
                            prop:value=move || criteria.get().end_date
                            on:input=move |ev| {
                                on_criteria_change(FilterField::EndDate, event_target_value(&ev));
                            }
                            style="padding: 4px 6px; border-radius: 4px; border: 1px solid var(--border-color);"
                        />
                    </div>
                </div>

                <Select
                    label="Report Type:"
                    value=Signal::derive(move || criteria.get().report_type)
                    on_change=Callback::new(move |v| {
                        on_criteria_change(FilterField::ReportType, v);
                    })
                    options=report_type_options
                />

                <Select
                    label="Branch:"
                    value=Signal::derive(move || criteria.get().branch)
                    on_change=Callback::new(move |v| {
                        on_criteria_change(FilterField::Branch, v);
                    })
                    options=branch_options
                />

                <Select
                    label="Checklist:"
                    value=Signal::derive(move || criteria.get().checklist)
                    on_change=Callback::new(move |v| {
                        on_criteria_change(FilterField::Checklist, v);
                    })
                    options=checklist_options
                />

                <button
                    on:click=on_export
                    style="padding: 4px 12px; background: #28a745; color: white; border: none; border-radius: 4px; cursor: pointer;"
                    title="Export filtered rows to Excel"
                >
                    "Export to Excel"
                </button>
            </div>

            {move || {
                if loading.get() {
                    view! { <p>"Loading..."</p> }.into_any()
                } else if let Some(err) = error.get() {
                    view! { <p style="color: red;">"Error: " {err}</p> }.into_any()
                } else {
                    view! {
                        <table style="width: 100%; border-collapse: collapse; font-size: var(--font-size-sm);">
                            <thead>
                                <tr style="border-bottom: 2px solid var(--border-color);">
                                    <th style="padding: 8px; text-align: left;">"ID"</th>
                                    <th style="padding: 8px; text-align: left;">"Date"</th>
                                    <th style="padding: 8px; text-align: left;">"Report Type"</th>
                                    <th style="padding: 8px; text-align: left;">"Branch"</th>
                                    <th style="padding: 8px; text-align: left;">"Checklist"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let items = filtered.get();
                                    if items.is_empty() {
                                        view! {
                                            <tr>
                                                <td
                                                    colspan="5"
                                                    style="padding: 12px; text-align: center;"
                                                >
                                                    "No Data Available"
                                                </td>
                                            </tr>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <For
                                                each=move || items.clone()
                                                key=|item| item.id
                                                children=move |item: ReportEntry| {
                                                    view! {
                                                        <tr style="border-bottom: 1px solid var(--border-color);">
                                                            <td style="padding: 6px 8px;">{item.id}</td>
                                                            <td style="padding: 6px 8px;">{item.date}</td>
                                                            <td style="padding: 6px 8px;">
                                                                {item.report_type.to_string()}
                                                            </td>
                                                            <td style="padding: 6px 8px;">
                                                                {item.branch.to_string()}
                                                            </td>
                                                            <td style="padding: 6px 8px;">
                                                                {item.checklist.to_string()}
                                                            </td>
                                                        </tr>
                                                    }
                                                }
                                            />
                                        }
                                            .into_any()
                                    }
                                }}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
