use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Ident, LitInt};

extern crate proc_macro;

/// `equivalence_test!(N)` expands to a `#[test]` running the caller's
/// `equivalence_test` helper for sequences of length N, so each length
/// reports as its own test.
#[proc_macro]
pub fn equivalence_test(tokens: TokenStream) -> TokenStream {
    let sequence_len = parse_macro_input!(tokens as LitInt);
    let test_function_name = Ident::new(
        &format!("equivalence_len_{}", sequence_len),
        Span::call_site(),
    );
    let tokens = quote! {
        #[test]
        fn #test_function_name () {
            equivalence_test( #sequence_len );
        }
    };
    tokens.into()
}
