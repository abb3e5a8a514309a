use std::fmt;
use std::str::FromStr;

use super::Language;
use crate::commands::naming::NameVariants;
use crate::commands::project::Framework;
use crate::error::InitraError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl FromStr for HttpMethod {
    type Err = InitraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(InitraError::InvalidOption(format!(
                "Invalid HTTP method '{s}'. Use GET, POST, PUT, PATCH or DELETE."
            ))),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// Handler body shared by the Next and Express flavours.
///
/// `reply(payload, status)` renders the framework's response call.
fn handler_body(
    route: &str,
    method: HttpMethod,
    body_expr: &str,
    reply: impl Fn(&str, u16) -> String,
) -> String {
    match method {
        HttpMethod::Get => format!(
            r#"    const data = {{
      message: '{route} data fetched successfully',
      timestamp: new Date().toISOString(),
    }};

    {}"#,
            reply("data", 200)
        ),
        HttpMethod::Post => format!(
            r#"    const body = {body_expr};

    const result = {{
      message: '{route} created successfully',
      data: body,
      id: Math.random().toString(36).slice(2, 11),
    }};

    {}"#,
            reply("result", 201)
        ),
        HttpMethod::Put | HttpMethod::Patch => {
            let verb = if method == HttpMethod::Put { "updated" } else { "patched" };
            format!(
                r#"    const body = {body_expr};

    const result = {{
      message: '{route} {verb} successfully',
      data: body,
      timestamp: new Date().toISOString(),
    }};

    {}"#,
                reply("result", 200)
            )
        }
        HttpMethod::Delete => format!(
            r#"    const result = {{
      message: '{route} deleted successfully',
      timestamp: new Date().toISOString(),
    }};

    {}"#,
            reply("result", 200)
        ),
    }
}

/// API route handler for a single HTTP method.
pub fn api_route(
    name: &NameVariants,
    method: HttpMethod,
    language: Language,
    framework: Framework,
) -> String {
    let route = &name.original;
    let ts = language.is_typescript();

    if framework == Framework::Next {
        let import = if ts {
            "import { NextRequest, NextResponse } from 'next/server';"
        } else {
            "import { NextResponse } from 'next/server';"
        };
        let param = if ts { ": NextRequest" } else { "" };
        let ret = if ts { ": Promise<NextResponse>" } else { "" };
        let body = handler_body(route, method, "await request.json()", |payload, status| {
            if status == 200 {
                format!("return NextResponse.json({payload});")
            } else {
                format!("return NextResponse.json({payload}, {{ status: {status} }});")
            }
        });
        format!(
            r#"{import}

export async function {method}(request{param}){ret} {{
  try {{
{body}
  }} catch (error) {{
    console.error('Error in {route} {method}:', error);
    return NextResponse.json({{ error: 'Internal Server Error' }}, {{ status: 500 }});
  }}
}}
"#
        )
    } else {
        let import = if ts {
            "import { Request, Response } from 'express';\n\n"
        } else {
            ""
        };
        let params = if ts { "req: Request, res: Response" } else { "req, res" };
        let handler = format!("{}{}", method.to_string().to_lowercase(), name.pascal);
        let body = handler_body(route, method, "req.body", |payload, status| {
            if status == 200 {
                format!("res.json({payload});")
            } else {
                format!("res.status({status}).json({payload});")
            }
        });
        format!(
            r#"{import}export const {handler} = ({params}) => {{
  try {{
{body}
  }} catch (error) {{
    console.error('Error in {route} {method}:', error);
    res.status(500).json({{ error: 'Internal Server Error' }});
  }}
}};
"#
        )
    }
}

/// Page component served at the route.
pub fn page_route(name: &NameVariants, language: Language, framework: Framework) -> String {
    let pascal = &name.pascal;
    let module = &name.original;
    let content = r#"    <div className={styles.container}>
      <h1 className={styles.title}>PASCAL</h1>
      <p className={styles.description}>Welcome to the PASCAL page.</p>

      <div className={styles.content}>
        <div className={styles.card}>
          <h2>Getting Started</h2>
          <p>Edit this page to add your content.</p>
        </div>
      </div>
    </div>"#
        .replace("PASCAL", pascal);

    if framework == Framework::Next {
        let metadata = if language.is_typescript() {
            format!(
                r#"import type {{ Metadata }} from 'next';
import styles from './{module}.module.css';

export const metadata: Metadata = {{
  title: '{pascal}',
  description: '{pascal} page description',
}};
"#
            )
        } else {
            format!("import styles from './{module}.module.css';\n")
        };
        format!(
            r#"{metadata}
export default function {pascal}Page() {{
  return (
{content}
  );
}}
"#
        )
    } else {
        let annotation = if language.is_typescript() { ": React.FC" } else { "" };
        format!(
            r#"import React from 'react';
import styles from './{module}.module.css';

const {pascal}Page{annotation} = () => {{
  return (
{content}
  );
}};

export default {pascal}Page;
"#
        )
    }
}

pub fn page_css() -> String {
    r#".container {
  min-height: 100vh;
  padding: 2rem;
  background-color: #f5f5f5;
}

.title {
  font-size: 2.5rem;
  font-weight: bold;
  color: #333;
  text-align: center;
  margin-bottom: 1rem;
}

.description {
  font-size: 1.2rem;
  color: #666;
  text-align: center;
  margin-bottom: 2rem;
}

.content {
  max-width: 800px;
  margin: 0 auto;
}

.card {
  background: white;
  padding: 2rem;
  border-radius: 12px;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  margin-bottom: 1rem;
}

.card h2 {
  color: #333;
  margin-bottom: 1rem;
}

.card p {
  color: #666;
  line-height: 1.6;
}
"#
    .to_string()
}
