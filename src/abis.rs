use ethers::contract::abigen;

abigen!(
    Greeter,
    r#"[
        function greet() public view returns (string)
    ]"#
);
