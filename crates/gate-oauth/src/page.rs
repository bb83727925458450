//! # Callback Success Page
//!
//! Static HTML rendered after a successful token exchange. The token lands in
//! a hidden input with a copy-to-clipboard button; the page never posts the
//! token anywhere else.

/// Render the callback success page with the access token embedded.
pub fn success_page(auth_token: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Success</title>
    <style>
      body {{
        font-family: system-ui, sans-serif;
        padding: 2rem;
        text-align: center;
        background: #f0f8ff;
      }}
      .success-message {{
        font-size: 1.5rem;
        color: #2e7d32;
        margin-bottom: 1.5rem;
      }}
      button {{
        font-size: 1rem;
        padding: 0.5rem 1rem;
        cursor: pointer;
        background-color: #1976d2;
        color: white;
        border: none;
        border-radius: 4px;
      }}
      button:hover {{
        background-color: #115293;
      }}
      .hidden-input {{
        display: none;
      }}
    </style>
  </head>
  <body>
    <div class="success-message">Success!</div>
    <input type="text" id="hiddenInput" class="hidden-input" value="{auth_token}" />
    <button id="copyButton">Copy auth token</button>
    <script>
      const button = document.getElementById('copyButton');
      const hiddenInput = document.getElementById('hiddenInput');

      button.addEventListener('click', async () => {{
        try {{
          await navigator.clipboard.writeText(hiddenInput.value);
        }} catch (error) {{
          alert('Failed to copy');
        }}
      }});
    </script>
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_token() {
        let page = success_page("tok-xyz");

        assert!(page.contains(r#"value="tok-xyz""#));
        assert!(page.contains("Copy auth token"));
    }
}
