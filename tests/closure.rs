#[macro_use]
mod common;

#[test]
fn assigning_to_a_captured_variable_is_visible_through_the_closure() {
    assert_stdout!(
        "assign_to_closure",
        r#"var f; var g;
           {
               var local = "local";
               fun f_() { print local; local = "after f"; print local; }
               f = f_;
               fun g_() { print local; local = "after g"; print local; }
               g = g_;
           }
           f(); g();"#,
        "local\nafter f\nafter f\nafter g\n"
    );
}

#[test]
fn a_function_closes_over_its_own_parameter() {
    assert_stdout!(
        "close_over_parameter",
        r#"var f;
           fun foo(param) { fun show() { print param; } f = show; }
           foo("param");
           f();"#,
        "param\n"
    );
}

#[test]
fn a_closure_sees_updates_to_a_variable_declared_after_it() {
    assert_stdout!(
        "close_over_later_variable",
        r#"var f;
           {
               var a = "a";
               fun show_a() { print a; }
               f = show_a;
               var b = "b";
           }
           f();"#,
        "a\n"
    );
}

#[test]
fn nested_closures_each_capture_their_own_scope() {
    assert_stdout!(
        "nested_closure",
        r#"var f;
           fun f1() {
               var a = "a";
               fun f2() {
                   var b = "b";
                   fun f3() {
                       var c = "c";
                       fun f4() { print a; print b; print c; }
                       f = f4;
                   }
                   f3();
               }
               f2();
           }
           f1();
           f();"#,
        "a\nb\nc\n"
    );
}

#[test]
fn a_closure_is_independent_of_later_reuse_of_the_same_local_slot() {
    assert_stdout!(
        "shadow_closure_with_local",
        r#"{
               var closure = "closure";
               fun f() { print closure; }
               {
                   fun g() { print "shadow"; g = f; }
               }
               f();
           }"#,
        "closure\n"
    );
}
