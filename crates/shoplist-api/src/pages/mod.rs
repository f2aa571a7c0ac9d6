//! Inline HTML pages
//!
//! The UI is three small server-rendered pages. No templating engine:
//! the markup is assembled with `format!` and a minimal HTML escaper.

use shoplist_service::dto::{CartSummaryResponse, ItemResponse};

/// Escape text for safe interpolation into HTML
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const TIMESTAMP_FORMAT: &str = "%H:%M %d.%m.%Y";

/// Render the dashboard: active items with checkout controls plus the
/// latest carts as collapsible sections.
pub fn dashboard_page(items: &[ItemResponse], carts: &[CartSummaryResponse]) -> String {
    let mut body = String::new();

    body.push_str("<h1>\u{1F6D2} Active Shopping List</h1>\n");
    body.push_str("<form id=\"deactivateForm\">\n");
    if items.is_empty() {
        body.push_str("    <p>No active items.</p>\n");
    } else {
        body.push_str("    <ul>\n");
        for item in items {
            body.push_str(&format!(
                "        <li><input type=\"checkbox\" name=\"item\" value=\"{}\" /> {}, {}</li>\n",
                item.id,
                escape_html(&item.name),
                item.created_at.format(TIMESTAMP_FORMAT),
            ));
        }
        body.push_str("    </ul>\n");
        body.push_str(
            "    <input type=\"number\" id=\"amountInput\" placeholder=\"Total amount\" required />\n",
        );
        body.push_str(
            "    <button type=\"button\" onclick=\"deactivateSelected()\">Save Changes</button>\n",
        );
    }
    body.push_str("</form>\n");

    body.push_str("<h2>\u{1F6D2} Latest Carts</h2>\n");
    if carts.is_empty() {
        body.push_str("<p>No carts yet.</p>\n");
    } else {
        for cart in carts {
            body.push_str(&format!(
                "<div>\n    <button onclick=\"toggleCart('cart{id}')\">Cart #{id} \u{2013} {ts} - {amount}</button>\n    <ul id=\"cart{id}\" style=\"display: none; margin-top: 5px;\">\n",
                id = cart.id,
                ts = cart.created_at.format(TIMESTAMP_FORMAT),
                amount = cart.total_amount,
            ));
            for line in &cart.items {
                body.push_str(&format!(
                    "        <li>{} ({})</li>\n",
                    escape_html(&line.name),
                    line.created_at.format(TIMESTAMP_FORMAT),
                ));
            }
            body.push_str("    </ul>\n</div>\n");
        }
    }

    body.push_str("<h2>\u{2795} Add Item</h2>\n");
    body.push_str("<input type=\"text\" id=\"itemInput\" placeholder=\"New item name\" />\n");
    body.push_str("<button onclick=\"addItem()\">Add</button>\n");
    body.push_str("<p><a href=\"/logout\">Log out</a></p>\n");

    page("Shopping List", &body, DASHBOARD_SCRIPT)
}

/// Render the login form, optionally with an inline error line
pub fn login_page(error: Option<&str>) -> String {
    credentials_page("Log In", "/login", error, "No account? <a href=\"/signup\">Sign up</a>")
}

/// Render the signup form, optionally with an inline error line
pub fn signup_page(error: Option<&str>) -> String {
    credentials_page(
        "Sign Up",
        "/signup",
        error,
        "Already have an account? <a href=\"/login\">Log in</a>",
    )
}

fn credentials_page(title: &str, action: &str, error: Option<&str>, footer: &str) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{title}</h1>\n"));
    if let Some(msg) = error {
        body.push_str(&format!(
            "<p style=\"color: red;\">{}</p>\n",
            escape_html(msg)
        ));
    }
    body.push_str(&format!(
        "<form method=\"post\" action=\"{action}\">\n    <input type=\"text\" name=\"username\" placeholder=\"Username\" required />\n    <input type=\"password\" name=\"password\" placeholder=\"Password\" required />\n    <button type=\"submit\">{title}</button>\n</form>\n"
    ));
    body.push_str(&format!("<p>{footer}</p>\n"));

    page(title, &body, "")
}

fn page(title: &str, body: &str, script: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n    <title>{title}</title>\n    <meta charset=\"UTF-8\">\n</head>\n<body>\n{body}{script}</body>\n</html>"
    )
}

const DASHBOARD_SCRIPT: &str = r#"<script>
function addItem() {
    const itemName = document.getElementById("itemInput").value;
    if (!itemName) {
        alert("Item name cannot be empty!");
        return;
    }

    fetch('/items', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ name: itemName })
    })
    .then(response => {
        if (response.ok) {
            location.reload();
        } else {
            alert("Adding the item failed!");
        }
    });
}
function deactivateSelected() {
    const checkboxes = document.querySelectorAll('input[name="item"]:checked');
    const ids = Array.from(checkboxes).map(cb => parseInt(cb.value));
    const amount = parseInt(document.getElementById("amountInput").value);

    if (ids.length === 0) {
        alert("Please select at least one item.");
        return;
    }

    if (!amount || isNaN(amount)) {
        alert("Please enter a valid total amount.");
        return;
    }

    fetch('/items/deactivate', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ ids: ids, amount: amount })
    })
    .then(response => {
        if (response.ok) {
            location.reload();
        } else {
            alert("Checkout failed!");
        }
    });
}
function toggleCart(id) {
    const el = document.getElementById(id);
    el.style.display = el.style.display === 'none' ? 'block' : 'none';
}
</script>
"#;
