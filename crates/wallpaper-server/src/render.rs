// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTML rendering of the index page.

use wallpaper_common_i18n::{LocaleConfig, Translations};
use wallpaper_server_config::HttpConfig;

/// Wallpaper shown on the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperSpec {
	pub width: u32,
	pub height: u32,
	pub seed: u64,
}

impl WallpaperSpec {
	fn svg_path(&self) -> String {
		format!(
			"/api/wallpaper.svg?width={}&height={}&seed={}",
			self.width, self.height, self.seed
		)
	}
}

/// Render the index page in `locale`.
///
/// `locale` must be a served locale; the router resolves it before rendering.
/// Canonical, alternate and download links are absolute under `http.base_url`.
pub fn index_page(
	locale: &str,
	locales: &LocaleConfig,
	translations: &Translations,
	http: &HttpConfig,
	wallpaper: WallpaperSpec,
) -> String {
	let title = escape_html(&translations.t(locale, "WallpaperWeb"));
	let tagline = escape_html(&translations.t(locale, "Procedurally generated wallpapers"));
	let language = escape_html(&translations.t(locale, "Language"));
	let alt = escape_html(&translations.t(locale, "Starfield wallpaper"));
	let regenerate = escape_html(&translations.t(locale, "Generate new wallpaper"));
	let download = escape_html(&translations.t(locale, "Download"));
	let resolution = escape_html(&translations.t_fmt(
		locale,
		"Resolution: {width} × {height}",
		&[
			("width", &wallpaper.width.to_string()),
			("height", &wallpaper.height.to_string()),
		],
	));
	let canonical = escape_html(&http.public_url(locale));
	let alternates = alternate_links(http, locales);
	let locale = escape_html(locale);
	let svg_path = wallpaper.svg_path();
	let svg_url = escape_html(&svg_path);
	let download_url = escape_html(&http.public_url(&svg_path));
	let switcher = language_switcher(&locale, locales);

	format!(
		r#"<!DOCTYPE html>
<html lang="{locale}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="canonical" href="{canonical}">
{alternates}    <link rel="stylesheet" href="/static/style.css">
</head>
<body data-locale="{locale}">
    <header>
        <h1>{title}</h1>
        <p class="tagline">{tagline}</p>
        <nav aria-label="{language}">
            <ul class="languages">
{switcher}            </ul>
        </nav>
    </header>
    <main>
        <figure>
            <img class="wallpaper" src="{svg_url}" alt="{alt}">
            <figcaption>{resolution}</figcaption>
        </figure>
        <p class="actions">
            <a href="/{locale}">{regenerate}</a>
            <a href="{download_url}" download="wallpaper.svg">{download}</a>
        </p>
    </main>
</body>
</html>
"#
	)
}

fn alternate_links(http: &HttpConfig, locales: &LocaleConfig) -> String {
	let mut links = String::new();
	for info in locales.supported() {
		links.push_str(&format!(
			"    <link rel=\"alternate\" hreflang=\"{code}\" href=\"{href}\">\n",
			code = escape_html(info.code),
			href = escape_html(&http.public_url(info.code)),
		));
	}
	links
}

fn language_switcher(current: &str, locales: &LocaleConfig) -> String {
	let mut items = String::new();
	for info in locales.supported() {
		let current_attr = if info.code == current {
			r#" aria-current="true""#
		} else {
			""
		};
		items.push_str(&format!(
			"                <li><a href=\"/change_lang/{code}\" hreflang=\"{code}\"{current_attr}>{name}</a></li>\n",
			code = escape_html(info.code),
			name = escape_html(info.display_name),
		));
	}
	items
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
