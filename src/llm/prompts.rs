// Instruction text for the personalized advice request

pub const ADVICE_INSTRUCTION: &str = "Based on the following financial transactions and personal information, provide personalized financial advice.";

pub const ADVICE_FOCUS: &str = "Please provide advice on:
1. Budgeting: where spending can be trimmed and how to structure a monthly budget
2. Saving: a realistic savings target and how to build an emergency fund
3. Investing: suitable investment options given the person's age and lifestyle

Tailor the advice to the person's age, lifestyle and hobbies. Use \"###\" at the start of a line for section headings and \"**\" around key figures.";

pub const NO_TRANSACTIONS: &str = "(no transactions recorded)";
