use std::sync::Arc;

use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use crate::config::{AppConfig, APP_TITLE};
use crate::domain::entities::edit::TableEdit;
use crate::infra::export::csv::WriteOptions;
use crate::infra::import::csv::ReadOptions;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::AppState;
use crate::ui::styles::{
    button_style, cell_input_style, root_container_style, table_cell_style,
    table_container_style, table_header_cell_style,
};
use crate::ui::view::{project, TableView};
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::ImportService;

#[derive(Clone)]
struct Services {
    import: Arc<ImportService>,
    export: Arc<ExportService>,
}

impl Services {
    fn new(config: &AppConfig) -> Self {
        Self {
            import: Arc::new(ImportService::new(ReadOptions::default())),
            export: Arc::new(ExportService::new(
                config.downloader(),
                WriteOptions::default(),
            )),
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let state = AppState::new();
    use_context_provider(|| state);
    use_context_provider(|| Services::new(&config));

    let session = state.session.read();
    let file_name = session.file_name().to_string();
    let view = project(&session, (state.busy)());
    drop(session);
    let status = state.status;

    rsx! {
        div {
            style: "{root_container_style()}",
            h1 { style: "margin: 0; font-size: 28px;", "{APP_TITLE}" }
            h2 { style: "margin: 0; font-size: 18px; font-weight: normal;", "Upload, Edit, and Download CSV Files" }

            UploadControl { file_name }

            {view.map(|view| rsx! {
                DataTable { view }
                TableActions {}
            })}

            div { style: "color: #555;", "{status}" }
        }
    }
}

#[component]
fn UploadControl(file_name: String) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let busy = state.busy;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            div {
                button {
                    style: "{button_style(false)}",
                    disabled: busy(),
                    onclick: move |_| {
                        let import_service = services.import.clone();
                        let ticket = state.begin_upload();
                        spawn(async move {
                            let Some(handle) = AsyncFileDialog::new()
                                .add_filter("CSV", &["csv"])
                                .pick_file()
                                .await
                            else {
                                state.cancel_upload(ticket);
                                return;
                            };
                            let picked_name = handle.file_name();
                            let bytes = handle.read().await;
                            state.finish_upload(ticket, import_service.import_bytes(&picked_name, &bytes));
                        });
                    },
                    "Choose CSV File"
                }
            }
            if !file_name.is_empty() {
                p { style: "margin: 0;", "Uploaded file: {file_name}" }
            }
        }
    }
}

#[component]
fn DataTable(view: TableView) -> Element {
    let state = use_context::<AppState>();
    let locked = view.locked;

    rsx! {
        div {
            style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        for header in view.headers.iter() {
                            th { style: "{table_header_cell_style()}", "{header}" }
                        }
                    }
                }
                tbody {
                    {view.rows.iter().map(|row| {
                        let row_idx = row.row_idx;
                        rsx!(
                            tr {
                                key: "{row_idx}",
                                {row.cells.iter().map(|cell| {
                                    let column = cell.key.column.clone();
                                    let col_idx = cell.key.col_idx;
                                    let value = cell.value.clone();
                                    rsx!(
                                        td {
                                            key: "{col_idx}",
                                            style: "{table_cell_style()}",
                                            input {
                                                style: "{cell_input_style()}",
                                                value: "{value}",
                                                disabled: locked,
                                                oninput: move |event| {
                                                    state.apply(TableEdit::SetCell {
                                                        row_idx,
                                                        column: column.clone(),
                                                        value: event.value(),
                                                    });
                                                },
                                            }
                                        }
                                    )
                                })}
                                td { style: "{table_cell_style()}",
                                    button {
                                        style: "{button_style(true)}",
                                        disabled: locked,
                                        onclick: move |_| state.apply(TableEdit::DeleteRow { row_idx }),
                                        "Delete"
                                    }
                                }
                            }
                        )
                    })}
                }
            }
        }
    }
}

#[component]
fn TableActions() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let busy = state.busy;

    rsx! {
        div {
            style: "display: flex; justify-content: space-between;",
            button {
                style: "{button_style(false)}",
                disabled: busy(),
                onclick: move |_| state.apply(TableEdit::AddRow),
                "Add Row"
            }
            button {
                style: "{button_style(false)}",
                disabled: busy(),
                onclick: move |_| {
                    let session = state.session.read();
                    let download_name = session.export_file_name();
                    let result = run_blocking("export", || {
                        services.export.export(session.table(), &download_name)
                    });
                    drop(session);
                    state.finish_export(result);
                },
                "Download CSV"
            }
        }
    }
}
