use serde_json::{json, Value};

/// An `rtm.connect` hello frame.
pub(crate) const HELLO: &str = r#"{"type": "hello"}"#;

/// A channel message as delivered over RTM.
pub(crate) const MESSAGE: &str = r#"{
    "type": "message",
    "channel": "C2147483705",
    "user": "U2147483697",
    "text": "bot pr list",
    "ts": "1355517523.000005"
}"#;

fn user_json(login: &str) -> Value {
    json!({
        "login": login,
        "id": 1,
        "node_id": "MDQ6VXNlcjE=",
        "avatar_url": format!("https://avatars.githubusercontent.com/{login}"),
        "html_url": format!("https://github.com/{login}"),
        "type": "User",
        "site_admin": false,
    })
}

/// Trimmed `GET /repos/acme/widgets/pulls` item.
pub(crate) fn pull_request_json(number: u64, title: &str, login: &str) -> Value {
    json!({
        "url": format!("https://api.github.com/repos/acme/widgets/pulls/{number}"),
        "id": number * 1000,
        "html_url": format!("https://github.com/acme/widgets/pull/{number}"),
        "number": number,
        "state": "open",
        "locked": false,
        "title": title,
        "user": user_json(login),
        "body": null,
        "labels": [],
        "draft": false,
        "head": {
            "label": format!("{login}:topic-{number}"),
            "ref": format!("topic-{number}"),
            "sha": format!("sha-{number}"),
        },
        "base": {
            "label": "acme:main",
            "ref": "main",
            "sha": "0000000000000000000000000000000000000000",
        },
    })
}

/// Trimmed `GET /repos/acme/widgets/issues` item.
pub(crate) fn issue_json(
    number: u64,
    title: &str,
    login: &str,
    labels: &[&str],
    is_pull_request: bool,
) -> Value {
    let mut issue = json!({
        "url": format!("https://api.github.com/repos/acme/widgets/issues/{number}"),
        "id": number * 1000,
        "html_url": format!("https://github.com/acme/widgets/issues/{number}"),
        "number": number,
        "state": "open",
        "title": title,
        "user": user_json(login),
        "labels": labels
            .iter()
            .map(|name| json!({"id": 1, "name": name, "color": "f1c40f", "default": false}))
            .collect::<Vec<_>>(),
        "comments": 0,
    });
    if is_pull_request {
        issue["pull_request"] = json!({
            "url": format!("https://api.github.com/repos/acme/widgets/pulls/{number}"),
            "html_url": format!("https://github.com/acme/widgets/pull/{number}"),
        });
    }
    issue
}

/// Trimmed `GET /repos/acme/widgets/commits/{sha}/statuses` item.
pub(crate) fn status_json(id: u64, state: &str) -> Value {
    json!({
        "id": id,
        "url": format!("https://api.github.com/repos/acme/widgets/statuses/{id}"),
        "state": state,
        "description": format!("The build is {state}"),
        "target_url": "https://ci.example.com/build/1",
        "context": "continuous-integration/example",
    })
}
