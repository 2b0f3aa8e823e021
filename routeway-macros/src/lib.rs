use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Expr, ExprArray, Ident, LitStr, Token, braced,
    parse::{Parse, ParseStream},
    parse_macro_input, token,
};

/// Declare a block of routes.
///
/// ```rust,ignore
/// routes!(&mut router, {
///     GET "/" => "IndexController", name = "home";
///     PUT "/user/(n)" => "UserController.update", middleware = ["auth"];
///     prefix "admin" {
///         namespace "Admin" {
///             GET "/users" => "UserController@list";
///         }
///     }
/// })?;
/// ```
///
/// Each entry becomes a `Router::map` call, followed by `name` and
/// `middleware` when given; `prefix` and `namespace` blocks become the
/// matching scope calls. The whole invocation evaluates to
/// `Result<(), RouteError>` and stops at the first failing registration.
#[proc_macro]
pub fn routes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as RoutesInput);
    let router = &input.router;
    let body = expand_items(&input.items);

    let expanded = quote! {
        (|__routeway_router: &mut ::routeway::Router|
            -> ::core::result::Result<(), ::routeway::RouteError> {
            #body
            ::core::result::Result::Ok(())
        })(#router)
    };

    TokenStream::from(expanded)
}

fn expand_items(items: &[RouteItem]) -> TokenStream2 {
    let statements = items.iter().map(|item| match item {
        RouteItem::Route {
            method,
            pattern,
            destination,
            name,
            middleware,
        } => {
            let method = method.to_string();
            let name = name.as_ref().map(|name| quote! { .name(#name) });
            let middleware = middleware
                .as_ref()
                .map(|items| quote! { .middleware(#items) });
            quote! {
                __routeway_router
                    .map(#method, #pattern, #destination)?
                    #name
                    #middleware;
            }
        }
        RouteItem::Scope { kind, value, items } => {
            let body = expand_items(items);
            quote! {
                __routeway_router.#kind(#value, |__routeway_router| {
                    #body
                    ::core::result::Result::Ok(())
                })?;
            }
        }
    });

    quote! { #(#statements)* }
}

struct RoutesInput {
    router: Expr,
    items: Vec<RouteItem>,
}

impl Parse for RoutesInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let router: Expr = input.parse()?;
        input.parse::<Token![,]>()?;

        let content;
        braced!(content in input);
        let items = parse_items(&content)?;

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        Ok(RoutesInput { router, items })
    }
}

enum RouteItem {
    Route {
        method: Ident,
        pattern: LitStr,
        destination: Expr,
        name: Option<LitStr>,
        middleware: Option<ExprArray>,
    },
    Scope {
        kind: Ident,
        value: LitStr,
        items: Vec<RouteItem>,
    },
}

fn parse_items(input: ParseStream) -> syn::Result<Vec<RouteItem>> {
    let mut items = Vec::new();
    while !input.is_empty() {
        items.push(input.parse()?);
    }
    Ok(items)
}

impl Parse for RouteItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        let value: LitStr = input.parse()?;

        if input.peek(token::Brace) {
            let kind = ident.to_string();
            if kind != "prefix" && kind != "namespace" {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown scope: {}, expected `prefix` or `namespace`", kind),
                ));
            }
            let content;
            braced!(content in input);
            let items = parse_items(&content)?;
            return Ok(RouteItem::Scope {
                kind: ident,
                value,
                items,
            });
        }

        input.parse::<Token![=>]>()?;
        let destination: Expr = input.parse()?;

        let mut name = None;
        let mut middleware = None;
        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "name" => name = Some(input.parse()?),
                "middleware" => middleware = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown route option: {}", other),
                    ));
                }
            }
        }

        if !input.is_empty() {
            input.parse::<Token![;]>()?;
        }

        Ok(RouteItem::Route {
            method: ident,
            pattern: value,
            destination,
            name,
            middleware,
        })
    }
}
