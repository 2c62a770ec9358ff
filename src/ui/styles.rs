pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; overflow: hidden; box-sizing: border-box; padding: 16px; gap: 12px; font-family: sans-serif;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #bbb;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 2; border: 1px solid #bbb; padding: 6px; background: #f2f2f2; text-align: left;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px;"
}

pub fn cell_input_style() -> &'static str {
    "width: 100%; box-sizing: border-box; border: 1px solid #ddd; border-radius: 4px; padding: 4px 6px;"
}

pub fn button_style(destructive: bool) -> &'static str {
    if destructive {
        "border: 1px solid #d24; background: #d24; color: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    } else {
        "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    }
}
