//! Server-rendered HTML views.

use classgate_entity::lesson_request::LessonRequest;

/// Days offered by the course. Requests for other days are not rejected
/// anywhere; this list only drives the request buttons on `/main`.
const LESSON_DAYS: std::ops::RangeInclusive<u32> = 1..=7;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title} · ClassGate</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

/// Escape text for interpolation into HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

pub fn landing_page() -> String {
    layout(
        "Welcome",
        "<h1>ClassGate</h1>\n\
         <p>Per-day lesson content, unlocked on admin approval.</p>\n\
         <p><a href=\"/login\">Log in</a> or <a href=\"/signup\">sign up</a>.</p>",
    )
}

pub fn login_page() -> String {
    layout(
        "Log in",
        "<h1>Log in</h1>\n\
         <form method=\"post\" action=\"/login\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label><br>\n\
         <label>Password <input type=\"password\" name=\"password\"></label><br>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>",
    )
}

pub fn signup_page() -> String {
    layout(
        "Sign up",
        "<h1>Sign up</h1>\n\
         <form method=\"post\" action=\"/signup\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label><br>\n\
         <label>Password <input type=\"password\" name=\"password\"></label><br>\n\
         <label>Confirm password <input type=\"password\" name=\"confirmPassword\"></label><br>\n\
         <button type=\"submit\">Sign up</button>\n\
         </form>",
    )
}

pub fn admin_login_page() -> String {
    layout(
        "Admin login",
        "<h1>Admin login</h1>\n\
         <form method=\"post\" action=\"/admin-login\">\n\
         <label>Username <input type=\"text\" name=\"username\"></label><br>\n\
         <label>Password <input type=\"password\" name=\"password\"></label><br>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>",
    )
}

/// The logged-in user's dashboard: approved lessons plus request buttons.
pub fn main_page(email: &str, approved: &[LessonRequest]) -> String {
    let mut body = format!("<h1>Welcome, {}</h1>\n", escape(email));

    if approved.is_empty() {
        body.push_str("<p>No lessons unlocked yet.</p>\n");
    } else {
        body.push_str("<h2>Your lessons</h2>\n<ul>\n");
        for request in approved {
            let day = escape(&request.day);
            body.push_str(&format!(
                "<li><a href=\"/lesson/{day}\">Lesson day {day}</a></li>\n"
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<h2>Request a lesson</h2>\n");
    for day in LESSON_DAYS {
        body.push_str(&format!(
            "<form method=\"post\" action=\"/request-lesson/{day}\" style=\"display:inline\">\
             <button type=\"submit\">Day {day}</button></form>\n"
        ));
    }

    body.push_str(
        "<form method=\"post\" action=\"/logout\"><button type=\"submit\">Log out</button></form>",
    );
    layout("Your lessons", &body)
}

/// The lesson content page for an approved day.
pub fn lesson_page(day: &str) -> String {
    let day = escape(day);
    layout(
        &format!("Lesson day {day}"),
        &format!(
            "<h1>Lesson day {day}</h1>\n\
             <p>Content for day {day}.</p>\n\
             <p><a href=\"/main\">Back to your lessons</a></p>"
        ),
    )
}

/// The admin panel: every request across all users.
pub fn admin_page(requests: &[LessonRequest]) -> String {
    let mut body = String::from("<h1>Lesson requests</h1>\n");

    if requests.is_empty() {
        body.push_str("<p>No requests yet.</p>\n");
    } else {
        body.push_str(
            "<table border=\"1\">\n<tr><th>Email</th><th>Day</th><th>Status</th><th></th></tr>\n",
        );
        for request in requests {
            let action = if request.status.is_approved() {
                String::new()
            } else {
                format!(
                    "<form method=\"post\" action=\"/admin/approve-request/{}\">\
                     <button type=\"submit\">Approve</button></form>",
                    request.id
                )
            };
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{action}</td></tr>\n",
                escape(&request.email),
                escape(&request.day),
                request.status
            ));
        }
        body.push_str("</table>\n");
    }

    layout("Admin", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use classgate_entity::lesson_request::RequestStatus;
    use uuid::Uuid;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a@x.com"), "a@x.com");
        assert_eq!(
            escape("<script>\"&'"),
            "&lt;script&gt;&quot;&amp;&#39;"
        );
    }

    #[test]
    fn test_user_content_is_escaped() {
        let page = main_page("<b>@x.com", &[]);
        assert!(page.contains("&lt;b&gt;@x.com"));
        assert!(!page.contains("<b>@x.com"));
    }

    #[test]
    fn test_admin_page_offers_approve_for_pending_only() {
        let pending = LessonRequest {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            day: "3".to_string(),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            approved_at: None,
        };
        let approved = LessonRequest {
            id: Uuid::new_v4(),
            status: RequestStatus::Approved,
            ..pending.clone()
        };

        let page = admin_page(&[pending.clone(), approved]);
        assert_eq!(page.matches("Approve</button>").count(), 1);
        assert!(page.contains(&format!("/admin/approve-request/{}", pending.id)));
    }
}
