/// HTML views for the user directory
///
/// Every page is rendered into a shared layout. User-supplied values are
/// escaped before they reach the markup.
///
/// # Pages
///
/// - `index_page`: landing page
/// - `users_index_page`: table of all users with edit/delete actions
/// - `new_user_page`: blank creation form
/// - `show_user_page`: details of one user
/// - `edit_user_page`: creation form pre-filled with current values

use axum::response::Html;
use roster_shared::models::user::User;

/// Escapes text for use in HTML content and double-quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="/">Главная</a> | <a href="/users">Пользователи</a></nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    ))
}

fn user_form(action: &str, name: &str, email: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
<p><label>Имя <input type="text" name="name" value="{name}" required></label></p>
<p><label>Email <input type="email" name="email" value="{email}" required></label></p>
<p><button type="submit">{submit}</button></p>
</form>
"#,
        name = escape(name),
        email = escape(email),
    )
}

/// Landing page
pub fn index_page() -> Html<String> {
    layout(
        "Управление пользователями",
        r#"<p>Простое приложение для управления списком пользователей.</p>
<p><a href="/users">Список пользователей</a></p>
"#,
    )
}

/// Listing of all users in store order
pub fn users_index_page(users: &[User]) -> Html<String> {
    let mut body = String::from("<p><a href=\"/users/new\">Добавить пользователя</a></p>\n");

    if users.is_empty() {
        body.push_str("<p>Пользователей нет</p>\n");
        return layout("Пользователи", &body);
    }

    body.push_str("<table>\n<tr><th>ID</th><th>Имя</th><th>Email</th><th></th></tr>\n");
    for user in users {
        let row = format!(
            r#"<tr><td>{id}</td><td><a href="/users/{id}">{name}</a></td><td>{email}</td><td><a href="/users/{id}/edit">Изменить</a> <form method="post" action="/users/{id}/delete"><button type="submit">Удалить</button></form></td></tr>
"#,
            id = user.id,
            name = escape(&user.name),
            email = escape(&user.email),
        );
        body.push_str(&row);
    }
    body.push_str("</table>\n");

    layout("Пользователи", &body)
}

/// Blank creation form
pub fn new_user_page() -> Html<String> {
    layout("Новый пользователь", &user_form("/users/new", "", "", "Создать"))
}

/// Details of a single user
pub fn show_user_page(user: &User) -> Html<String> {
    let body = format!(
        r#"<dl>
<dt>ID</dt><dd>{id}</dd>
<dt>Имя</dt><dd>{name}</dd>
<dt>Email</dt><dd>{email}</dd>
</dl>
<p><a href="/users/{id}/edit">Изменить</a></p>
"#,
        id = user.id,
        name = escape(&user.name),
        email = escape(&user.email),
    );

    layout(&user.name, &body)
}

/// Edit form pre-filled with the user's current values
pub fn edit_user_page(user: &User) -> Html<String> {
    let action = format!("/users/{}/edit", user.id);
    layout(
        "Редактирование пользователя",
        &user_form(&action, &user.name, &user.email, "Сохранить"),
    )
}
